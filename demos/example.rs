use cmdargs::{ArgError, ArgStore};

struct Config {
    help: bool,
    name: String,
    number: i32,
    ratio: f32,
    values: Vec<i32>,
}

fn extract(store: &mut ArgStore) -> Result<Config, ArgError> {
    let help = store.get_flag("help", None, "Getting usage") > 0;
    let name = store.get_param("name", None, "stone".to_string(), "The name of something")?;
    let number = store.get_param("number", Some('n'), 5, "Number of whatever")?;

    store.add_usage_separator("  == Advanced options:");
    let ratio = store.get_param("ratio", None, 0.2f32, "The ratio")?;
    let values = store.get_params(
        "values",
        None,
        vec![1, 2],
        true,
        "A comma separated list of values",
    )?;
    store.error_if_unparsed()?;

    Ok(Config {
        help,
        name,
        number,
        ratio,
        values,
    })
}

fn main() {
    let mut store = ArgStore::from_env("Example of command line arguments");
    let result = extract(&mut store);
    let config = store.exit_on_error(result);

    if config.help || std::env::args().len() == 1 {
        store.print_usage();
    }

    println!();
    println!("name={}", config.name);
    println!("number={}", config.number);
    println!("ratio={}", config.ratio);
    let values: Vec<String> = config.values.iter().map(|v| v.to_string()).collect();
    println!("numbers={}", values.join(","));

    let remaining = store.remaining();

    if remaining.is_empty() {
        println!("no arg remaining");
    } else {
        println!("remaining: {}", remaining.join(" "));
    }
}
