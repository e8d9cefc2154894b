pub fn print_info(message: &str) {
    println!("[tablefig][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[tablefig][ERROR]: {message}");
}
