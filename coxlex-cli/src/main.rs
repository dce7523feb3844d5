//! Coxlex: an interactive short-lex automaton builder and word reducer for
//! Coxeter groups.
use std::path::PathBuf;

use argh::FromArgs;
use rustyline::DefaultEditor;

use coxlex_opt::{reduce, Automaton, ReduceOutcome};
use coxlex_utils::{
    MAX_FILENAME_LEN, MAX_NESTED_WORD_LEN, MAX_ROOT_OUTPUT_LENGTH, MAX_WORD_LEN,
};

#[derive(FromArgs)]
/// Build the Brink-Howlett short-lex automaton for a Coxeter group and
/// classify words against it.
struct Opts {
    /// path to the Coxeter matrix file
    #[argh(positional)]
    matrix_file: PathBuf,

    /// cap on the number of positive-minimal roots, guarding against
    /// matrices that describe an infinite root system
    #[argh(option, long = "max-roots")]
    max_roots: Option<usize>,

    /// cap on the number of automaton states
    #[argh(option, long = "max-states")]
    max_states: Option<usize>,

    /// cap on the expanded length of an entered word
    #[argh(option, long = "max-word-len", default = "MAX_WORD_LEN")]
    max_word_len: usize,

    /// cap on bracket-nesting depth in an entered word
    #[argh(option, long = "max-nested-len", default = "MAX_NESTED_WORD_LEN")]
    max_nested_len: usize,
}

fn main() {
    env_logger::init();
    let opts: Opts = argh::from_env();

    if opts.matrix_file.as_os_str().len() > MAX_FILENAME_LEN {
        eprintln!(
            "error: matrix file path exceeds the maximum length of {MAX_FILENAME_LEN}"
        );
        std::process::exit(1);
    }

    let matrix = match coxlex_frontend::load_matrix_file(&opts.matrix_file) {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("error loading matrix file: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "loaded {}x{} Coxeter matrix from {}",
        matrix.n(),
        matrix.n(),
        opts.matrix_file.display()
    );

    let automaton =
        match Automaton::build(matrix, opts.max_roots, opts.max_states) {
            Ok(automaton) => automaton,
            Err(e) => {
                eprintln!("error building automaton: {e}");
                std::process::exit(1);
            }
        };

    println!(
        "automaton ready: {} minimal roots, {} states over {} generators",
        automaton.minimal_roots().len(),
        automaton.num_states(),
        automaton.n()
    );
    println!("commands: :roots  :matrix  :quit   (anything else is read as a word)");

    repl(&automaton, opts.max_word_len, opts.max_nested_len);
}

fn repl(automaton: &Automaton, max_word_len: usize, max_nested_len: usize) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("could not start the line editor: {e}");
            return;
        }
    };

    loop {
        let line = match editor.readline("coxlex> ") {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        match line {
            ":quit" | ":q" => break,
            ":roots" => dump_roots(automaton),
            ":matrix" => dump_matrix(automaton),
            word => handle_word(automaton, word, max_word_len, max_nested_len),
        }
    }
}

fn handle_word(
    automaton: &Automaton,
    word: &str,
    max_word_len: usize,
    max_nested_len: usize,
) {
    let expanded = match coxlex_frontend::expand_word_with_limits(
        word,
        max_word_len,
        max_nested_len,
    ) {
        Ok(expanded) => expanded,
        Err(e) => {
            println!("invalid word: {e}");
            return;
        }
    };
    let generators =
        match coxlex_frontend::parse_generators(&expanded, automaton.n()) {
            Ok(generators) => generators,
            Err(e) => {
                println!("invalid word: {e}");
                return;
            }
        };

    match reduce(automaton, &generators) {
        ReduceOutcome::Reduced => {
            println!("reduced (length {})", generators.len())
        }
        ReduceOutcome::NotReduced { position } => {
            println!("not reduced: rejects at symbol {position}")
        }
    }
}

fn dump_roots(automaton: &Automaton) {
    println!("{} positive-minimal roots:", automaton.minimal_roots().len());
    for &id in automaton.minimal_roots() {
        let root = automaton.registry().get(id);
        let all = root.coefficients();
        let shown = &all[..all.len().min(MAX_ROOT_OUTPUT_LENGTH)];
        let coeffs: Vec<String> =
            shown.iter().map(|c| format!("{c:.4}")).collect();
        if shown.len() < all.len() {
            println!(
                "  {id}: [{}, ... ({} more)]",
                coeffs.join(", "),
                all.len() - shown.len()
            );
        } else {
            println!("  {id}: [{}]", coeffs.join(", "));
        }
    }
}

fn dump_matrix(automaton: &Automaton) {
    let matrix = automaton.matrix();
    for i in 0..matrix.n() {
        let row: Vec<String> = (0..matrix.n())
            .map(|j| matrix.get(i, j).to_string())
            .collect();
        println!("  {}", row.join(" "));
    }
}
