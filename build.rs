fn main() {
    // ESP-IDF sysenv passthrough is only meaningful for on-target builds.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
