use crate::ports::Console;

/// Console writing to stdout, with warnings on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn info(&self, message: &str) {
        if message.is_empty() {
            println!();
        } else {
            println!("ℹ️  {}", message);
        }
    }

    fn success(&self, message: &str) {
        println!("✅ {}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn plain(&self, message: &str) {
        println!("{}", message);
    }
}
