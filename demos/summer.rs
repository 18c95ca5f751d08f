use argbind::ArgParser;

fn main() {
    let mut items: Vec<i32> = Vec::default();
    let mut verbose = false;

    let mut parser = ArgParser::new("summer");
    parser.add_help('h', "help", "Sums up the items.");
    parser
        .add_int_argument(("item", "The items to sum."))
        .multi_value(1)
        .positional()
        .store_values(&mut items);
    parser
        .add_flag(('v', "verbose", "Show each item."))
        .store_value(&mut verbose);

    match parser.parse() {
        Ok(true) if parser.help_requested() => std::process::exit(0),
        Ok(true) => {}
        Ok(false) => {
            eprintln!("{}", parser.help_description());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
    };

    drop(parser);

    if verbose {
        for item in &items {
            println!("+ {item}");
        }
    }

    let sum: i32 = items.iter().sum();
    println!("Sum: {sum}");
}
