/// Port for operator-facing output.
pub trait Console {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    /// Unprefixed text.
    fn plain(&self, message: &str);
}
