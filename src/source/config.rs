pub struct Config {
    /// File looked up when the source points at a directory.
    pub points_file_name: String,
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            points_file_name: "relay_points.csv".into(),
            delimiter: b',',
        }
    }
}
