use anyhow::Result;

use gallery_core::{AppConfig, Geometry};

use super::LayoutArgs;

pub fn run(config: &AppConfig, layout: &LayoutArgs) -> Result<()> {
    let gallery = layout.gallery_config(config);
    gallery.validate()?;
    let geometry = Geometry::new(gallery.slide_count, gallery.margin, layout.width)?;

    println!("Slides:         {}", geometry.slide_count());
    println!("Viewport width: {:.1}px", geometry.viewport_width());
    println!("Margin:         {:.1}px", geometry.margin());
    println!("Track width:    {:.1}px", geometry.track_width());
    println!("Maximum offset: {:.1}px", geometry.maximum_offset());
    println!("\nSettled offsets:");
    for slide in 0..geometry.slide_count() {
        let marker = if slide == gallery.initial_slide { " (initial)" } else { "" };
        println!("  {:>3}: {:.1}px{}", slide, geometry.settled_offset(slide), marker);
    }

    Ok(())
}
