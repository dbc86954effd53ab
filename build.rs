fn main() {
    println!("cargo:rerun-if-changed=resources/windows/resources.rc");
    println!("cargo:rerun-if-changed=resources/windows/lang-indicator.manifest");

    // Build scripts run on the host, so check the target explicitly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Embed version info and the DPI-aware manifest
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
