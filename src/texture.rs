use anyhow::{Context, Result};
use std::path::Path;

/// Checkerboard cell count along each axis of the fallback texture.
const CHECKER_CELLS: u32 = 16;

/// A GPU texture with its view and sampler, ready to bind.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Decodes an image file and uploads it as an sRGB texture.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {path:?}"))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        log::info!("Loaded texture {path:?} ({width}x{height})");
        Ok(Self::from_pixels(
            device,
            queue,
            &image,
            width,
            height,
            Some(&path.display().to_string()),
        ))
    }

    /// Uploads raw RGBA8 pixels.
    pub fn from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: Option<&str>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // u wraps across the sphere's seam; v is clamped at the poles.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Planet Texture Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Procedural stand-in used when no texture file is configured.
    pub fn checkerboard(device: &wgpu::Device, queue: &wgpu::Queue, size: u32) -> Self {
        let pixels = checkerboard_pixels(size);
        Self::from_pixels(device, queue, &pixels, size, size, Some("Checkerboard"))
    }
}

/// RGBA8 checkerboard with `CHECKER_CELLS` cells per axis.
pub fn checkerboard_pixels(size: u32) -> Vec<u8> {
    let cell = (size / CHECKER_CELLS).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell) + (y / cell)) % 2 == 0;
            let rgb: [u8; 3] = if even {
                [200, 200, 210]
            } else {
                [60, 90, 160]
            };
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }

    pixels
}
