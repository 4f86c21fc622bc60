//! `padlink encode` / `padlink decode` - stdin access to the token codec.

use std::io::Read;

use padlink::codec;

pub fn run_encode() -> anyhow::Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    println!("{}", codec::encode(&text));
    Ok(())
}

pub fn run_decode() -> anyhow::Result<()> {
    let mut token = String::new();
    std::io::stdin().read_to_string(&mut token)?;
    let text = codec::decode(token.trim())?;
    print!("{text}");
    Ok(())
}
