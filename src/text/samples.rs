//! Built-in cover texts.

/// Sample covers offered by the demo.
pub const SAMPLE_COVERS: [&str; 3] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "The quick brown fox jumps over the lazy dog. This pangram contains every letter of the alphabet and makes for excellent steganography testing. Hidden messages can be embedded seamlessly within ordinary text.",
    "In a hole in the ground there lived a hobbit. Not a nasty, dirty, wet hole, filled with the ends of worms and an oozy smell, nor yet a dry, bare, sandy hole with nothing in it to sit down on or to eat.",
];

/// Words of every sample cover, in order.
pub fn sample_filler_words() -> Vec<String> {
    SAMPLE_COVERS
        .iter()
        .flat_map(|text| text.split_whitespace())
        .map(str::to_string)
        .collect()
}
