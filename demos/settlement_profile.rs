use settlement_core::foundation::FoundationGeometry;
use settlement_core::scenario::*;
use settlement_core::settlement::SettlementAnalysis;
use settlement_core::soil::{SoilProfile, presets};
use settlement_core::stress::InfluenceGrid;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Footing Settlement Analysis ===\n");

    let s = "-".repeat(50);

    println!("Test 1: Scenario File");
    println!("{}", s);
    test_scenario_file();

    println!("\n");

    println!("Test 2: Preset Profile");
    println!("{}", s);
    test_preset_profile();

    println!("\n");

    println!("Test 3: Influence Section");
    println!("{}", s);
    test_influence_section();
}

fn test_scenario_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/scenario.toml");
    let config = match ScenarioConfig::from_toml_file(path) {
        Ok(config) => config,
        Err(e) => {
            println!("Could not load {}: {}", path, e);
            return;
        }
    };

    match config.run() {
        Ok(comparison) => {
            println!("{}", comparison.coarse.summary());
            print!("{}", comparison.summary());

            let csv_path = std::env::temp_dir().join("settlement_profile.csv");
            match write_profile_csv_file(&comparison.coarse, &csv_path) {
                Ok(()) => println!("Profile written to {}", csv_path.display()),
                Err(e) => println!("Export failed: {}", e),
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn test_preset_profile() {
    let footing = FoundationGeometry::new_si(3.0, 3.0, 150.0);
    let profile = SoilProfile::new(
        vec![
            presets::loose_sand(2.0),
            presets::soft_clay(6.0),
            presets::dense_sand(4.0),
        ],
        2.0,
    );

    let analysis = SettlementAnalysis::new(footing, profile);
    match analysis.evaluate_with_default_reference(0.25) {
        Ok(comparison) => {
            println!("{}", comparison.coarse.summary());
            print!("{}", comparison.summary());
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn test_influence_section() {
    let footing = FoundationGeometry::new_si(4.0, 2.0, 100.0);
    match InfluenceGrid::for_footing(&footing, 6.0) {
        Ok(grid) => {
            println!("Grid: {} depths x {} offsets", grid.nrows(), grid.ncols());
            println!("Max influence factor: {:.3}", grid.max_factor());

            let center = grid.ncols() / 2;
            for row in [0, grid.nrows() / 4, grid.nrows() / 2, grid.nrows() - 1] {
                if let Some(stress) = grid.stress_at(row, center, footing.pressure) {
                    println!(" z = {:.2} m: {:.2} kPa", grid.depths[row], stress);
                }
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}
