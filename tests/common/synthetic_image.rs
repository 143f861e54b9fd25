use presage::image::ColorImageU8;

/// Uniform BGR buffer at the given brightness.
pub fn uniform_color(width: usize, height: usize, value: u8) -> ColorImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ColorImageU8::new(width, height);
    img.data.fill(value);
    img
}

/// Bright palm-like field with two long dark horizontal creases.
pub fn creased_palm(width: usize, height: usize) -> ColorImageU8 {
    assert!(width >= 200 && height >= 120, "creases need room");
    let mut img = uniform_color(width, height, 210);
    let dark = [45u8, 45, 45];
    for y in height / 3..height / 3 + 4 {
        for x in 20..width - 20 {
            img.set(x, y, dark);
        }
    }
    for y in 2 * height / 3..2 * height / 3 + 4 {
        for x in 30..width - 30 {
            img.set(x, y, dark);
        }
    }
    img
}
