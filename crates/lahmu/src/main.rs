//! Lahmu - CSS selector builder
//!
//! Usage: lahmu [OPTIONS]

use std::env;
use std::process::ExitCode;

use lahmu_selector::{combine, element, id, Category, Combinator, Selector, SelectorResult};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("Lahmu {}", VERSION);
            ExitCode::SUCCESS
        }
        "--demo" => {
            if let Err(e) = run_demo() {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        _ => match build_from_args(&args[1..]) {
            Ok(selector) => {
                println!("{}", selector);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Lahmu {} - CSS selector builder

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help               Print this help message
    -V, --version            Print version information
    --demo                   Print a few showcase selectors
    --element <TAG>          Set the element part (at most once)
    --id <NAME>              Set the id part (at most once)
    --class <NAME>           Append a class part (repeatable)
    --attr <EXPR>            Append an attribute part (repeatable)
    --pseudo-class <NAME>    Append a pseudo-class part (repeatable)
    --pseudo-element <NAME>  Set the pseudo-element part (at most once)

Parts must be given in category order: element, id, class, attribute,
pseudo-class, pseudo-element.

EXAMPLES:
    {} --element div --id main --class container
    {} --element a --attr 'href$=".png"' --pseudo-class focus
    {} --demo

"#,
        VERSION, program, program, program, program
    );
}

/// Build one selector from flag/value argument pairs
fn build_from_args(args: &[String]) -> Result<Selector, String> {
    let mut selector: Option<Selector> = None;
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let category = match flag.as_str() {
            "--element" => Category::Element,
            "--id" => Category::Id,
            "--class" => Category::Class,
            "--attr" => Category::Attribute,
            "--pseudo-class" => Category::PseudoClass,
            "--pseudo-element" => Category::PseudoElement,
            other => return Err(format!("Unknown option: {}", other)),
        };

        let value = iter
            .next()
            .ok_or_else(|| format!("{} requires a value", flag))?;

        log::debug!("Adding {} fragment: {}", category, value);

        selector = Some(match selector.take() {
            None => lahmu_selector::part(category, value),
            Some(current) => current.push(category, value).map_err(|e| e.to_string())?,
        });
    }

    selector.ok_or_else(|| "No selector parts given".to_string())
}

/// Print a few showcase selectors
fn run_demo() -> SelectorResult<()> {
    println!("{}", id("main").class("container")?.class("editable")?);

    println!("{}", element("a").attr("href$=\".png\"")?.pseudo_class("focus")?);

    let nested = combine(
        element("div").id("main")?.class("container")?.class("draggable")?,
        Combinator::NextSibling,
        combine(
            element("table").id("data")?,
            Combinator::SubsequentSibling,
            combine(
                element("tr").pseudo_class("nth-of-type(even)")?,
                Combinator::Descendant,
                element("td").pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    println!("{}", nested);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_from_flags() {
        let sel = build_from_args(&args(&[
            "--element",
            "div",
            "--id",
            "main",
            "--class",
            "container",
        ]))
        .unwrap();
        assert_eq!(sel.stringify(), "div#main.container");
    }

    #[test]
    fn test_repeatable_flags() {
        let sel = build_from_args(&args(&["--class", "a", "--class", "b"])).unwrap();
        assert_eq!(sel.stringify(), ".a.b");
    }

    #[test]
    fn test_out_of_order_flags() {
        let err = build_from_args(&args(&["--class", "a", "--id", "main"])).unwrap_err();
        assert_eq!(err, "id must come before class in a selector");
    }

    #[test]
    fn test_duplicate_singleton_flag() {
        let err = build_from_args(&args(&["--id", "main", "--id", "other"])).unwrap_err();
        assert_eq!(err, "id may occur at most once in a selector");
    }

    #[test]
    fn test_unknown_option() {
        let err = build_from_args(&args(&["--bogus", "x"])).unwrap_err();
        assert_eq!(err, "Unknown option: --bogus");
    }

    #[test]
    fn test_flag_without_value() {
        let err = build_from_args(&args(&["--class"])).unwrap_err();
        assert_eq!(err, "--class requires a value");
    }

    #[test]
    fn test_no_parts() {
        let err = build_from_args(&[]).unwrap_err();
        assert_eq!(err, "No selector parts given");
    }
}
