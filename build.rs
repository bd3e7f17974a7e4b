fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF environment (linker args, sdkconfig) is only needed for the
    // on-device binary; host builds of the library skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
