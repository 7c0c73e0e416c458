use block_string::{BlockString, IndexOutOfRange};

///
/// Exercises the chain operations and prints the results
///
fn main() -> Result<(), IndexOutOfRange> {
    // Construct a chain from initial text
    let mut text = BlockString::from("Itmo University");
    println!("{}", text);
    println!("length: {}", text.len());

    // Append a second chain, consuming it
    text.append(BlockString::from(" more then University"));
    println!("{}", text);

    // Splice a string into the middle
    text.insert_str(2, "-insert-")?;
    println!("{}", text);

    // Carve out an independent substring
    println!("{}", text.substring(2, 44)?);

    Ok(())
}
