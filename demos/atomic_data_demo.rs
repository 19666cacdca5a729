use nucdata::{atomic_mass, ensure_loaded, natural_abundance, Config, NuclideId};

fn main() {
    println!("=== Atomic Data Demo ===");

    // Settings are read once, on first load
    Config::global().set_validate_on_load(true);
    let data = ensure_loaded();
    println!(
        "Loaded {} masses and {} abundances",
        data.masses().len(),
        data.abundances().len()
    );

    // Mean atomic weight of natural lithium from isotopic masses
    let lithium = [NuclideId(30060), NuclideId(30070)];
    let mut weight = 0.0;
    for id in lithium {
        let mass = atomic_mass(id).unwrap();
        let abundance = natural_abundance(id).unwrap();
        println!("  {}: mass {:.10} u, abundance {}", id, mass, abundance);
        weight += mass * abundance;
    }
    println!("Natural lithium atomic weight: {:.5} u", weight);

    // Synthetic isomer: mass is known, abundance is not
    match natural_abundance(952421) {
        Ok(a) => println!("Am242m abundance: {}", a),
        Err(e) => println!("Am242m: {}", e),
    }
}
