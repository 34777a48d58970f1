use std::process;

fn main() {
    match facade_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("facade error: {err:#}");
            process::exit(1);
        }
    }
}
