use cmdargs::{ArgStore, LongMatch};

fn main() {
    let mut store = ArgStore::builder("Render a sequence of frames.")
        .long_match(LongMatch::Exact)
        .from_env();

    let help = store.get_flag("help", Some('h'), "Show this help message and exit.");
    let verbose = store.get_flag(
        "verbose",
        Some('v'),
        "Increase the verbosity (repeatable, ex: -vv).",
    );
    let result = store.get_param("frames", Some('f'), 1u32, "The number of frames to render.");
    let frames = store.exit_on_error(result);
    let result = store.get_params(
        "size",
        Some('s'),
        vec![640u32, 480],
        true,
        "The frame size, as width,height.\nA single value makes a square frame.",
    );
    let size = store.exit_on_error(result);
    let result = store.get_params_with_separator(
        "tags",
        Some('t'),
        Vec::<String>::default(),
        false,
        "Tags to attach to every frame, separated by ';'.",
        ';',
    );
    let tags = store.exit_on_error(result);
    store.add_usage_outro("\nEvery remaining argument names an output file.\n");

    if help > 0 {
        store.print_usage();
        return;
    }

    store.exit_on_error(store.error_if_unparsed());
    let outputs = store.remaining();

    if verbose > 0 {
        println!("frames={frames} size={size:?} tags={tags:?}");
    }

    for output in outputs {
        println!("{output}: {frames} frame(s) of {}x{}", size[0], size[1]);
    }
}
