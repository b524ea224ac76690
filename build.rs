use std::process::Command;

const DICTIONARY: &str = "src/spelling/frequency_en.txt";

fn main() {
    println!("cargo:rerun-if-changed={DICTIONARY}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let words = match check_dictionary(DICTIONARY) {
        Ok(words) => words,
        Err(message) => panic!("{DICTIONARY}: {message}"),
    };
    println!("cargo:rustc-env=CANVAS_ASSISTANT_DICTIONARY_WORDS={words}");

    let commit = run(&["git", "describe", "--always", "--dirty", "--abbrev=8"]);
    println!("cargo:rustc-env=CANVAS_ASSISTANT_GIT_HASH={commit}");

    // Reproducible builds pin the date through SOURCE_DATE_EPOCH
    let date = match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => run(&["date", "-u", "-d", &format!("@{epoch}"), "+%Y-%m-%d"]),
        Err(_) => run(&["date", "-u", "+%Y-%m-%d"]),
    };
    println!("cargo:rustc-env=CANVAS_ASSISTANT_BUILD_DATE={date}");
}

/// Every entry of the embedded word list must be `word<TAB>count` with a
/// lowercase alphabetic word; returns the number of entries.
fn check_dictionary(path: &str) -> Result<usize, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mut words = 0;
    for (n, line) in raw.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (word, count) = line
            .split_once('\t')
            .ok_or_else(|| format!("line {}: expected word<TAB>count", n + 1))?;
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(format!("line {}: bad word {word:?}", n + 1));
        }
        count
            .parse::<u32>()
            .map_err(|_| format!("line {}: bad count {count:?}", n + 1))?;
        words += 1;
    }
    Ok(words)
}

/// Trimmed stdout of a command, or `unknown` when it is unavailable.
fn run(args: &[&str]) -> String {
    Command::new(args[0])
        .args(&args[1..])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
