extern crate winres;

use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=fiplsim.ico");
    if cfg!(target_os = "windows") && Path::new("fiplsim.ico").exists() {
        let mut res = winres::WindowsResource::new();
        res.set_icon("fiplsim.ico");
        res.compile().unwrap();
    }
}
