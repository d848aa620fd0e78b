use log::info;
use persistent_treap::TreapMultiset;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::error::Error;
use std::io;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn report(name: &str, t: &TreapMultiset<i32>) {
    info!("{} [size: {}] {}", name, t.len(), t);
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::init(env_or("TREAP_LOG", LevelFilter::Info), Config::default())?;
    let step: i32 = env_or("TREAP_DEMO_STEP", 50);
    if step <= 0 {
        return Err(From::from("TREAP_DEMO_STEP must be positive"));
    }

    let t0 = TreapMultiset::new();
    report("t0", &t0);
    let t1 = t0.insert(10);
    report("t1", &t1);
    let t2 = t1.insert(201);
    report("t2", &t2);

    let mut t3 = t2.clone();
    for entry in (150..1000).step_by(step as usize) {
        t3 = t3.insert(entry);
        report("t3", &t3);
    }
    let mut entry = 955;
    while entry >= 100 {
        t3 = t3.insert(entry);
        report("t3", &t3);
        entry -= step;
    }

    let mut cursor = t3.begin();
    let mut iterated = Vec::new();
    while let Some(entry) = cursor.get() {
        iterated.push(entry.to_string());
        cursor.move_next();
    }
    info!("iteration: {}", iterated.join(", "));

    let t4 = t3.erase(&500);
    report("t4", &t4);
    info!("suffix from 255: {:?}", t3.range_from(&255).collect::<Vec<&i32>>());

    // earlier versions are untouched by everything above
    report("t2", &t2);

    if env::var("TREAP_DOT").is_ok() {
        t3.write_dot(&mut io::stdout())?;
    }
    Ok(())
}
