use cayley_dickson::prelude::*;
use cayley_dickson::verify::{self, Harness, Profile};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_table<A: Algebra + Named + std::fmt::Display>() {
    println!("\n=== {} unit table ===", A::NAME);
    let units: Vec<A> = (0..A::DIM).filter_map(A::unit).collect();
    for (row, x) in units.iter().enumerate() {
        let cells: Vec<String> = units.iter().map(|y| x.mul(y).to_string()).collect();
        println!("{:>4} | {}", A::SYMBOLS[row], cells.join("  "));
    }
}

fn print_profile<A: Quadratic + Named>(harness: &Harness) {
    let Profile {
        dim,
        commutative,
        associative,
        alternative,
        composition,
    } = verify::profile::<A>(harness);
    info!(algebra = A::NAME, dim, "profiled");
    println!(
        "{:<12} dim {:>2}  commutative {:<5}  associative {:<5}  alternative {:<5}  composition {:<5}",
        A::NAME, dim, commutative, associative, alternative, composition
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Exact Cayley-Dickson Tower ===");

    // 1. The 3-4-5 complex number and the inverse of 1 + i
    let z = Complex::new(int(3), int(4));
    println!("Q{} = {}", z, z.quad());
    let w = Complex::new(int(1), int(1));
    match w.inv() {
        Ok(w_inv) => println!("1/{} = {}", w, w_inv),
        Err(e) => println!("[FAIL] {}", e),
    }

    // 2. Structure constants
    print_table::<Hamilton>();
    print_table::<Cockle>();

    // 3. A Laurent polynomial on Infra: y² - 2 + 1/y
    let y = Infra::new(Complex::new(int(1), int(1)), Complex::new(int(2), int(0)));
    let p = Laurent::new()
        .term(2, int(1))
        .term(0, int(-2))
        .term(-1, int(1));
    match p.eval(&y) {
        Ok(v) => println!("\np({}) = {}", y, v),
        Err(e) => println!("\n[FAIL] {}", e),
    }

    // 4. Sampled profiles
    println!("\n=== Sampled properties ===");
    let harness = Harness::default();
    print_profile::<Complex>(&harness);
    print_profile::<Perplex>(&harness);
    print_profile::<Dual>(&harness);
    print_profile::<Hamilton>(&harness);
    print_profile::<Cockle>(&harness);
    print_profile::<Infra>(&harness);
    print_profile::<Hyper>(&harness);
    print_profile::<BiPerplex>(&harness);
    print_profile::<DualComplex>(&harness);
    print_profile::<Cayley>(&harness);
    print_profile::<Zorn>(&harness);
    print_profile::<InfraCockle>(&harness);
    print_profile::<BiCockle>(&harness);
    print_profile::<Supra>(&harness);
    print_profile::<Ultra>(&harness);
}
