use log::info;
use patmakr_core::model::specification::UNBOUNDED_LEVELS;
use patmakr_core::{Generator, LevelType, Origin, Specification};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Sequence of 1000 symbols with no constraint on the number of levels.
    // With an unbounded level count every representable length is kept.
    let mut specification = Specification::new(
        1_000,
        UNBOUNDED_LEVELS,
        Origin::Highest,
        LevelType::OnePatternManyTimes,
    )?;

    // Keep only the 2 lowest levels (pattern lengths 3 and 30)
    specification.set_nb_levels(2)?;
    specification.set_origin(Origin::Lowest);

    // A zero length is refused
    match specification.set_sequence_length(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Sequence length 0 is invalid: {e}"),
    }

    // The planned levels can be inspected before generating anything
    for (pattern_length, plan) in Generator::plan(&specification)? {
        println!("Pattern length {pattern_length}: {plan:?}");
    }

    // Same seed, same sequence
    let mut rng = StdRng::seed_from_u64(2017);
    let generated = Generator::run(&specification, &mut rng)?;
    info!("alphabet size: {}", generated.alphabet_size);

    let symbols = generated.into_symbols();
    println!(
        "{}",
        symbols
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
