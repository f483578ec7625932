//! tyname CLI
//!
//! Schema component identifiers for reflection-style type names.

use tyname::commands::{
    parse_register_options, parse_resolve_options, register_names, resolve_names,
};

fn main() {
    tyname::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];

    let result = match command.as_str() {
        "resolve" => parse_resolve_options(rest).and_then(|options| resolve_names(&options)),
        "register" => parse_register_options(rest).and_then(register_names),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tyname - schema identifiers for type names");
    println!();
    println!("Usage: tyname <command> [options] <type-name>...");
    println!();
    println!("Commands:");
    println!("  resolve     Print the identifier of each type name");
    println!("  register    Assign unique schema ids and print their references");
    println!("  help        Show this message");
    println!();
    println!("resolve options:");
    println!("  -f, --full              Include namespaces (fully qualified ids)");
    println!("  --friendly              Omit namespaces (default)");
    println!();
    println!("register options:");
    println!("  --full-names            Use fully qualified ids for every type");
    println!("  --on-conflict=<policy>  error (default) or qualify");
    println!("  --prefix=<prefix>       Reference prefix (default: #/components/schemas/)");
    println!();
    println!("Type names:");
    println!("  Namespace.Type                  Swashbuckle.AspNetCore.SwaggerGen.Test.ComplexType");
    println!("  Generic<Arg, ...> or [Arg,...]  System.Collections.Generic.IEnumerable`1[System.String]");
    println!("  Outer+Nested                    App.ContainingType+NestedType");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tyname_ids=debug) to enable logging,");
    println!("and TYNAME_LOG_TREE=1 for indented span output.");
}
