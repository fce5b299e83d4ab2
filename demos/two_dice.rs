use massdist::prelude::*;

fn main() {
    let damage = d6() + d6() + 2.0;
    let (low, high) = damage.bracket(0.25).unwrap();
    println!(
        "damage = {damage:?} mean = {} bracket = [{low}, {high}]",
        damage.mean()
    );
}
