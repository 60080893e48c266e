use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("frontpage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List and rank Hacker News front page stories")
        .arg(clap::arg!([INPUT] "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-m --mode <MODE> "View to apply")
                .value_name("MODE")
                .default_value("all")
                .value_parser([
                    "points-desc-short-titles",
                    "comments-desc-long-titles",
                    "all",
                    "points-and-words-lower-than",
                    "number-comments-and-words-greather-than",
                ]),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--pretty "Pretty print JSON output"))
        .arg(clap::arg!(--header "Include the mode and story count in the output"))
        .arg(clap::arg!(--width <COLS> "Wrap titles at this width in text output").default_value("0"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Show progress and timings on stderr"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "frontpage", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "frontpage", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "frontpage", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "frontpage", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
