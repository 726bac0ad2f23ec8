use icon_tint::{recolor::decode_png, Color, GradientSpec};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "app/src/main/res/mipmap-xxxhdpi/ic_launcher_foreground.png".to_string());
    let spec = match (args.next(), args.next()) {
        (Some(start), Some(end)) => GradientSpec::new(
            start.parse::<Color>().expect("Invalid start color"),
            end.parse::<Color>().expect("Invalid end color"),
        ),
        _ => GradientSpec::default(),
    };

    let bytes = std::fs::read(&path).expect("Failed to read image");
    let img = decode_png(&bytes).expect("Failed to decode image").to_rgba8();
    let (width, height) = img.dimensions();

    println!("Checking gradient in: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    println!("Expected gradient: {} → {}", spec.start, spec.end);

    // Only visible pixels carry meaningful color
    let mut mismatched_rows = 0;
    let mut visible_rows = 0;
    for y in 0..height {
        let expected = spec.color_for_row(y, height).channels();
        let visible: Vec<_> = (0..width)
            .map(|x| img.get_pixel(x, y))
            .filter(|p| p[3] > 0)
            .collect();
        if visible.is_empty() {
            continue;
        }

        visible_rows += 1;
        if visible.iter().any(|p| p.0[..3] != expected) {
            mismatched_rows += 1;
            if mismatched_rows <= 5 {
                let p = visible[0];
                println!(
                    "  row {}: expected {:?}, found RGBA [{}, {}, {}, {}]",
                    y, expected, p[0], p[1], p[2], p[3]
                );
            }
        }
    }

    println!("\nGradient analysis:");
    println!(
        "  {} out of {} visible rows match the expected color",
        visible_rows - mismatched_rows,
        visible_rows
    );

    if visible_rows > 0 && mismatched_rows == 0 {
        println!("✓ Gradient detected!");
    } else {
        println!("⚠ Image does not look recolored with this gradient");
    }
}
