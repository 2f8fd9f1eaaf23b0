// build.rs

fn main() {
    if search_on_environment_var() {
        #[cfg(all(feature = "linking", any(target_os = "linux", target_os = "macos")))]
        search_on_unix();
    }

    #[cfg(feature = "linking")]
    println!("cargo:rustc-link-lib=dylib=FBCAccess");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FBCACCESS_LIB_DIR");
}

fn search_on_environment_var() -> bool {
    // https://doc.rust-lang.org/cargo/reference/build-scripts.html#cargorustc-link-searchkindpath

    if let Ok(user_specified_dir) = std::env::var("FBCACCESS_LIB_DIR") {
        println!("cargo:rustc-link-search={}", user_specified_dir);
        return false;
    }
    true
}

#[cfg(all(feature = "linking", any(target_os = "linux", target_os = "macos")))]
fn search_on_unix() {
    use glob::glob;

    let frontbase_install_dirs: [&str; 4] = [
        "/Library/FrontBase/lib",
        "/usr/local/FrontBase/lib",
        "/opt/FrontBase/lib",
        "/usr/FrontBase/lib",
    ];

    for install_dir in &frontbase_install_dirs {
        let pattern = format!("{}/libFBCAccess*", install_dir);
        let found = match glob(&pattern) {
            Ok(found) => found,
            Err(_) => continue,
        };

        for path in found.flatten() {
            if path.is_file() {
                println!("cargo:rustc-link-search={}", install_dir);
                return;
            }
        }
    }
}

// end of code
