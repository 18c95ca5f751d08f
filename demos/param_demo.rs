use argbind::ArgParser;

fn main() {
    let mut parser = ArgParser::new("My Parser");
    parser.add_string_argument("param1");

    match parser.parse_tokens(&["app", "--param1=value1"]) {
        Ok(true) => println!("{}", parser.get_string_value("param1", None)),
        Ok(false) => eprintln!("Missing required options."),
        Err(e) => eprintln!("Parse error: {e}"),
    }
}
