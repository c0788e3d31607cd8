fn main() {
    if let Err(e) = healthlens_lib::run() {
        tracing::error!(error = %e, "HealthLens analysis failed");
        eprintln!("healthlens: {e}");
        std::process::exit(1);
    }
}
