//! Hash and Verify — produce a PHC string, inspect it, check passwords.
//!
//! Run with:
//!   cargo run --example hash_and_verify -p pago

use pago::{EncodedHash, Hasher, Params};

fn main() -> pago::Result<()> {
    // ── 1. Hash with the defaults ───────────────────────────────────────────
    //
    // A fresh 16-byte salt is drawn from the OS random source, and the
    // parameters used end up inside the string itself.
    let stored = pago::hash("correct horse battery staple", None)?;
    println!("Stored hash:");
    println!("  {stored}");
    println!();

    // ── 2. Inspect what the string carries ──────────────────────────────────
    let parsed = EncodedHash::parse(&stored)?;
    let params = parsed.params();
    println!("Parsed fields:");
    println!("  Algorithm:  {}", parsed.algorithm());
    println!("  Version:    {}", parsed.version());
    println!("  Memory:     {} KiB", params.memory_cost_kib());
    println!("  Time cost:  {}", params.time_cost());
    println!("  Lanes:      {}", params.parallelism());
    println!("  Salt:       {} bytes", parsed.salt().len());
    println!("  Hash:       {} bytes", parsed.hash().len());
    println!();

    // ── 3. Verify ───────────────────────────────────────────────────────────
    //
    // A wrong password is a normal outcome (`false`), not an error.
    for candidate in ["correct horse battery staple", "Tr0ub4dor&3"] {
        let ok = pago::verify(candidate, &stored)?;
        println!("  {candidate:<30} -> {}", if ok { "match" } else { "no match" });
    }
    println!();

    // ── 4. Malformed input is an error ──────────────────────────────────────
    match pago::verify("anything", "$argon2id$v=19$three$four$five") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("Rejected malformed hash: {e}"),
    }
    println!();

    // ── 5. Raise the cost and detect stale hashes ───────────────────────────
    let hasher = Hasher::new(Params::new(128 * 1024, 3, 2)?);
    println!(
        "Needs rehash under {}: {}",
        hasher.params(),
        hasher.needs_rehash(&stored)?
    );

    Ok(())
}
