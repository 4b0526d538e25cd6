//! Converts an epoch timestamp through the standard chain, renders it a
//! few ways, and parses one rendering back.

use calendric::{ConverterChain, Epoch, Formatter, Representation, SolarDate};

fn main() {
    let seconds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_710_513_000i64);

    let chain = ConverterChain::standard();
    let date = chain.from_epoch(Epoch::new(seconds, 0), SolarDate::default());

    println!("epoch seconds: {}", seconds);
    println!("day index:     {:?}", Representation::day_index(&date));
    println!("year:          {:?}", Representation::year(&date));

    let formatter = Formatter::new();
    for format in ["Y-m-d H:i:s", "D, j F Y", "l (\\w\\e\\e\\k W \\o\\f o)", "g:i a"] {
        println!("{:28} => {}", format, formatter.format(&date, format));
    }

    let compiled = calendric::compile("Y-m-d H:i:s|Y-m-d").expect("static format compiles");
    let rendered = formatter.format(&date, "Y-m-d H:i:s");
    match compiled.parse(&rendered) {
        Ok(fields) => {
            println!("\nparsed {:?}:", rendered);
            for (symbol, text) in fields.fields() {
                println!("  {} = {}", symbol, text);
            }
        }
        Err(err) => println!("parse failed: {}", err),
    }

    let back = chain.to_epoch(&date);
    println!("\nback to epoch: {}s + {}us", back.seconds, back.micros);
}
