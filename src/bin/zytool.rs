use std::fs;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use zhengyu_engine::dict::{builtin, CharDictionary, Romanization};
use zhengyu_engine::preserve::{LexiconPreserve, StaticTerms};
use zhengyu_engine::{ConversionResult, ZhengyuEngine};

#[derive(Parser)]
#[command(name = "zytool", about = "Zhengyu conversion and dictionary tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text and print the three output streams
    Convert {
        /// Text to convert
        text: String,
        /// Path to a compiled dictionary file (default: embedded seed)
        #[arg(long)]
        dict: Option<String>,
        /// Comma-separated preserve terms (default: built-in lexicon)
        #[arg(long)]
        preserve: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compile a TSV source (character<TAB>jyutping) into a dictionary file
    Compile {
        /// Path to the TSV source
        input_file: String,
        /// Path to the output dictionary file
        output_file: String,
    },

    /// Print dictionary stats and sample lookups
    Info {
        /// Path to the compiled dictionary file
        dict_file: String,
    },
}

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            text,
            dict,
            preserve,
            json,
        } => run_convert(&text, dict.as_deref(), preserve.as_deref(), json),
        Command::Compile {
            input_file,
            output_file,
        } => compile(&input_file, &output_file),
        Command::Info { dict_file } => info(&dict_file),
    }
}

fn load_dict(path: Option<&str>) -> CharDictionary {
    match path {
        Some(p) => die!(
            CharDictionary::open(Path::new(p)),
            "Error opening dictionary: {}"
        ),
        None => builtin::seed(),
    }
}

fn run_convert(text: &str, dict: Option<&str>, preserve: Option<&str>, json: bool) {
    let dict = std::sync::Arc::new(load_dict(dict));
    let engine = match preserve {
        Some(terms) => ZhengyuEngine::new(
            dict,
            std::sync::Arc::new(StaticTerms::new(terms.split(','))),
        ),
        None => ZhengyuEngine::new(
            dict,
            std::sync::Arc::new(LexiconPreserve::default_lexicon()),
        ),
    };

    let result = engine.convert(text);
    if json {
        print_json(&result);
    } else {
        println!("display:   {}", result.display);
        println!("phonetic:  {}", result.phonetic);
        println!("romanized: {}", result.romanized);
    }
}

fn print_json(result: &ConversionResult) {
    let value = serde_json::json!({
        "display": result.display,
        "phonetic": result.phonetic,
        "romanized": result.romanized,
    });
    println!("{value}");
}

fn compile(input_file: &str, output_file: &str) {
    let text = die!(
        fs::read_to_string(input_file),
        "Error reading {input_file}: {}"
    );
    let dict = die!(
        CharDictionary::from_tsv(&text),
        "Error parsing dictionary source: {}"
    );

    eprintln!("Compiled {} entries", dict.len());
    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output_file} ({:.1} KB)", file_size as f64 / 1024.0);
}

fn info(dict_file: &str) {
    let dict = die!(
        CharDictionary::open(Path::new(dict_file)),
        "Error opening dictionary: {}"
    );

    let file_size = fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);
    println!("Dictionary: {dict_file}");
    println!("File size:  {:.1} KB", file_size as f64 / 1024.0);
    println!("Entries:    {}", dict.len());

    let sample_keys = ['我', '你', '食', '香', '港'];
    println!();
    println!("Sample lookups:");
    for key in sample_keys {
        match dict.lookup(key) {
            Some(reading) => println!("  {key} → {reading}"),
            None => println!("  {key} → (not found)"),
        }
    }
}
