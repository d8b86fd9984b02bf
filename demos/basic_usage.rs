//! Basic usage example of typed and raw vectors

use secvec::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG=secvec=trace shows allocation and resize events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Typed Vector ===\n");

    let mut vec = Vector::<u32>::new(0);
    for i in 1..=5 {
        let len = vec.push(i * 10)?;
        println!("pushed {:>3}: len {} capacity {}", i * 10, len, vec.capacity());
    }

    println!("get(2)  = {:?}", vec.get(2));
    println!("get(99) = {:?}", vec.get(99));

    vec.put(12, 7)?;
    println!(
        "after put(12): len {} capacity {} get(11) = {:?}",
        vec.len(),
        vec.capacity(),
        vec.get(11)
    );

    vec.resize(3)?;
    println!("after resize(3): len {} capacity {}", vec.len(), vec.capacity());

    println!("\n=== Raw Vector ===\n");

    let mut raw = RawVector::new(8, 2);
    raw.push(&1.5f64.to_le_bytes())?;
    raw.push(&(-2.25f64).to_le_bytes())?;

    let mut out = [0u8; 8];
    if raw.read_into(1, &mut out)? {
        println!("record 1 = {}", f64::from_le_bytes(out));
    }

    match raw.push(&[0u8; 3]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("short record rejected: {}", e),
    }

    println!("\n=== Limits ===\n");

    let config = VectorConfig::default()
        .with_initial_capacity(0)
        .with_max_bytes(64);
    let mut small = Vector::<u64>::with_config(config)?;
    match small.put(100, 1) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("put(100) rejected: {}", e),
    }

    vec.free();
    raw.free();
    Ok(())
}
