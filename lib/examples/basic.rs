/// Basic example: run every transform over a generated test raster
///
/// This draws a simple scene and writes one PNG per operation
use image::Rgba;
use raster_fx::{
    FlipAxis, MosaicRenderer, Raster, blur, chroma_key, flip, grayscale, lighten, negate,
    paint_bucket, rotate, save_raster, show_edges,
};

fn main() -> raster_fx::Result<()> {
    println!("Raster FX - Basic Example");
    println!("=========================\n");

    // 200x160 gray canvas: 20x8 mosaic tiles
    let width = 200;
    let height = 160;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    let img = Raster::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < radius {
            // White disc
            Rgba([255, 255, 255, 255])
        } else if (dist - radius).abs() < 5.0 {
            // Black ring
            Rgba([0, 0, 0, 255])
        } else if x == y {
            // Red diagonal
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([100, 100, 100, 255])
        }
    });
    let background = Raster::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 180, 255])
    });

    println!("Created test raster: {}x{}", width, height);

    let outputs = [
        ("grayscale", grayscale(&img)),
        ("negate", negate(&img)),
        ("lighten", lighten(&img, 60)),
        ("rotate", rotate(&img, 1)),
        ("flip", flip(&img, FlipAxis::ForwardDiagonal)),
        ("blur", blur(&img, 3)?),
        ("edges", show_edges(&img, 30)?),
        ("chroma", chroma_key(&img, 0, 0, &background, 20)?),
        (
            "bucket",
            paint_bucket(&img, width / 2, height / 2, 20, Rgba([0, 200, 0, 255]))?,
        ),
        ("ascii", MosaicRenderer::default().render(&img)?),
    ];

    save_raster(&img, "basic_input.png")?;
    println!("✓ Saved input to:  basic_input.png");
    for (name, raster) in &outputs {
        let path = format!("basic_{name}.png");
        save_raster(raster, &path)?;
        println!("✓ Saved {name:<9} to: {path}");
    }

    println!("\nText mosaic:\n");
    print!("{}", MosaicRenderer::default().render_text(&img));
    Ok(())
}
