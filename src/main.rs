fn main() {
    // Logging is initialized inside process_cli, once --log-level is known
    let code = skipprefs::cli::process_cli();
    log::logger().flush();
    std::process::exit(code);
}
