//! Walks the primary demo filesystem and prints every entry, then reads one
//! asset back.

use std::io::Read;

use assetfs::{File, Fs};

fn walk(fs: &dyn Fs, dir: &str) {
    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    for entry in entries {
        let path = if dir.is_empty() {
            entry.name().to_owned()
        } else {
            format!("{dir}/{}", entry.name())
        };
        if entry.is_dir() {
            println!("{path}/");
            walk(fs, &path);
        } else {
            println!("{path} ({} bytes)", entry.size());
        }
    }
}

fn main() {
    env_logger::init();

    let fs = assetfs_demo::assets_fs();
    println!("{fs}");
    walk(&fs, "");

    let mut file = fs.open("hello.txt").expect("demo asset is embedded");
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .expect("demo asset is UTF-8");
    file.close();
    println!("hello.txt: {contents}");
}
