/// Line-oriented console seam.
///
/// `read` yields `None` once the input stream is closed, which the
/// runner treats as a quit. Lines come back with the trailing newline
/// stripped and nothing else: move and command tokens match exactly.
pub trait Io {
    fn read(&mut self) -> Option<String>;
    fn write(&mut self, msg: &str);
    fn prompt(&mut self, msg: &str) -> Option<String> {
        self.write(msg);
        self.read()
    }
}

/// The real stdin/stdout console.
pub struct Console;

impl Io for Console {
    fn read(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
    fn write(&mut self, msg: &str) {
        println!("{}", msg);
    }
}
