use crate::{catalog::RelayPoint, shared::geo::Coordinate};

/// Relay points of the Yaoundé pilot, in display order.
pub(crate) fn yaounde_points() -> Vec<RelayPoint> {
    [
        (
            "relay1",
            "Supermarché Mahima",
            "Rue 1.839, Yaoundé",
            [11.5174, 3.8721],
        ),
        (
            "relay2",
            "Librairie Papyrus",
            "Avenue Kennedy, Yaoundé",
            [11.5022, 3.8662],
        ),
        (
            "relay3",
            "Boutique Express",
            "Marché Central, Yaoundé",
            [11.5208, 3.8583],
        ),
        (
            "relay4",
            "Épicerie du Quartier",
            "Quartier Bastos, Yaoundé",
            [11.5128, 3.8905],
        ),
        (
            "relay5",
            "Kiosque Mobile",
            "Poste Centrale, Yaoundé",
            [11.5172, 3.8665],
        ),
    ]
    .into_iter()
    .map(|(id, name, address, position)| {
        RelayPoint::new(id, name, address, Coordinate::from(position), true)
    })
    .collect()
}
