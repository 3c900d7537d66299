/// Where a running script writes. The runtime owns one and never
/// touches stdout directly.
pub trait Terminal {
    fn print(&mut self, s: &str);

    fn newline(&mut self) {
        self.print("\n");
    }

    /// Diagnostics. Front ends may style these.
    fn error(&mut self, s: &str) {
        self.print(s);
    }
}

impl Terminal for String {
    fn print(&mut self, s: &str) {
        self.push_str(s);
    }
}
