// Copyright @yucwang 2026

use crate::core::material::{Scatter, ScatterType};
use crate::core::pdf::{HittablesPdf, MixturePdf, Pdf};
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;
use crate::math::color::{compute_color, lerp, BLACK, SKY_BLUE, WHITE};
use crate::math::constants::{degrees_to_radians, Color, Float, Int, Point3f, Vector3f, INFINITY};
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use crate::math::sampling::{sample_defocus_disk, sample_square_stratified};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

const BLOCK_SIZE: usize = 64;

/// Per-task ray counters. Each worker accumulates its own copy; the
/// collector merges them after the render.
#[derive(Debug, Default, Clone, Copy)]
pub struct RayStats {
    pub primary: u64,
    pub reflected: u64,
    pub refracted: u64,
}

impl RayStats {
    pub fn merge(&mut self, other: &RayStats) {
        self.primary += other.primary;
        self.reflected += other.reflected;
        self.refracted += other.refracted;
    }

    pub fn total(&self) -> u64 {
        self.primary + self.reflected + self.refracted
    }

    fn count_bounce(&mut self, scatter_type: ScatterType) {
        match scatter_type {
            ScatterType::Reflect => self.reflected += 1,
            ScatterType::Refract => self.refracted += 1,
        }
    }
}

/// Pinhole/thin-lens camera plus the recursive Monte-Carlo integrator.
/// Configure the public fields, then call `initialize` before `render`.
pub struct Camera {
    // Camera settings
    pub vertical_fov: Float,
    pub defocus_angle: Float,
    pub focus_distance: Float,

    // Position and orientation
    pub lookfrom: Point3f,
    pub lookat: Point3f,
    pub world_up: Vector3f,

    // Render seed; pixel RNG streams derive from it.
    pub seed: u64,

    // Derived state, valid after initialize().
    width: usize,
    height: usize,
    pixel00_loc: Point3f,
    pixel_delta_u: Vector3f,
    pixel_delta_v: Vector3f,
    defocus_disk_u: Vector3f,
    defocus_disk_v: Vector3f,
    sqrt_spp: usize,
    inv_sqrt_spp: Float,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            vertical_fov: 90.0,
            defocus_angle: 0.0,
            focus_distance: 10.0,
            lookfrom: Point3f::new(0.0, 0.0, 0.0),
            lookat: Point3f::new(0.0, 0.0, -1.0),
            world_up: Vector3f::new(0.0, 1.0, 0.0),
            seed: 0,
            width: 0,
            height: 0,
            pixel00_loc: Point3f::zeros(),
            pixel_delta_u: Vector3f::zeros(),
            pixel_delta_v: Vector3f::zeros(),
            defocus_disk_u: Vector3f::zeros(),
            defocus_disk_v: Vector3f::zeros(),
            sqrt_spp: 1,
            inv_sqrt_spp: 1.0,
        }
    }

    /// Derive the camera frame, viewport geometry and stratification grid
    /// from the public settings and the target image dimensions.
    pub fn initialize(&mut self, scene: &Scene, width: usize, height: usize) {
        self.width = width;
        self.height = height;

        let theta = degrees_to_radians(self.vertical_fov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_distance;
        let viewport_width = viewport_height * (width as Float) / (height as Float);

        // Camera frame basis vectors.
        let view = (self.lookfrom - self.lookat).normalize();
        let side = self.world_up.cross(&view).normalize();
        let up = view.cross(&side);

        // Viewport edge vectors and per-pixel deltas.
        let viewport_u = viewport_width * side;
        let viewport_v = viewport_height * -up;
        let viewport_w = self.focus_distance * view;

        self.pixel_delta_u = viewport_u / (width as Float);
        self.pixel_delta_v = viewport_v / (height as Float);

        let viewport_upper_left =
            self.lookfrom - viewport_w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = degrees_to_radians(self.defocus_angle / 2.0).tan();
        self.defocus_disk_u = side * defocus_radius * self.focus_distance;
        self.defocus_disk_v = up * defocus_radius * self.focus_distance;

        // Stratified sub-sample grid.
        self.sqrt_spp = (scene.samples_per_pixel as Float).sqrt().ceil() as usize;
        if self.sqrt_spp == 0 {
            self.sqrt_spp = 1;
        }
        self.inv_sqrt_spp = 1.0 / (self.sqrt_spp as Float);

        info!(
            "camera initialized: {}x{}, {} stratified samples/pixel",
            width,
            height,
            self.sqrt_spp * self.sqrt_spp
        );
    }

    /// Render the scene into the framebuffer. Pixels are processed in
    /// blocks by a fixed worker pool; every pixel derives a deterministic
    /// RNG stream from the render seed and its coordinates.
    pub fn render(&self, scene: &Scene, bitmap: &mut Bitmap) -> RayStats {
        let width = self.width;
        let height = self.height;
        assert!(
            width == bitmap.width() && height == bitmap.height(),
            "camera and framebuffer dimensions disagree"
        );

        info!("rendering started");
        let render_start = Instant::now();

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;

        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let (tx, rx) = mpsc::channel::<(usize, usize, usize, usize, Vec<[u8; 3]>, RayStats)>();

        let mut stats = RayStats::default();

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let bx = block_index % blocks_x;
                        let by = block_index / blocks_x;
                        let x0 = bx * BLOCK_SIZE;
                        let y0 = by * BLOCK_SIZE;
                        let x1 = (x0 + BLOCK_SIZE).min(width);
                        let y1 = (y0 + BLOCK_SIZE).min(height);

                        let mut block = vec![[0u8; 3]; (x1 - x0) * (y1 - y0)];
                        let mut block_stats = RayStats::default();
                        for y in y0..y1 {
                            for x in x0..x1 {
                                let mut rng = LcgRng::new(self.pixel_seed(x, y));
                                let rgb = self.render_pixel(scene, x, y, &mut rng, &mut block_stats);
                                block[(x - x0) + (x1 - x0) * (y - y0)] = rgb;
                            }
                        }
                        if tx.send((x0, y0, x1, y1, block, block_stats)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for _ in 0..total_blocks {
                if let Ok((x0, y0, x1, y1, block, block_stats)) = rx.recv() {
                    for y in y0..y1 {
                        for x in x0..x1 {
                            let index = bitmap.pixel_index(x, y);
                            bitmap.write_pixel(index, block[(x - x0) + (x1 - x0) * (y - y0)]);
                        }
                    }
                    stats.merge(&block_stats);
                    progress.inc(1);
                }
            }
        });
        progress.finish_and_clear();

        let elapsed = render_start.elapsed().as_secs_f64();
        info!(
            "rendering finished in {:.2} s: {} primary, {} reflected, {} refracted rays ({:.0} rays/s)",
            elapsed,
            stats.primary,
            stats.reflected,
            stats.refracted,
            stats.total() as f64 / elapsed.max(1e-9)
        );

        stats
    }

    fn pixel_seed(&self, x: usize, y: usize) -> u64 {
        ((self.seed & 0xFFF) << 32) | (((y as u64) & 0xFFFF) << 16) | ((x as u64) & 0xFFFF)
    }

    fn render_pixel(
        &self,
        scene: &Scene,
        x: usize,
        y: usize,
        rng: &mut LcgRng,
        stats: &mut RayStats,
    ) -> [u8; 3] {
        let mut pixel_color = BLACK;

        for sample_row in 0..self.sqrt_spp {
            for sample_column in 0..self.sqrt_spp {
                let ray = self.get_ray_sample(x, y, sample_row, sample_column, rng);
                stats.primary += 1;
                pixel_color += self.ray_color(&ray, scene.bounce_max_depth, scene, rng, stats);
            }
        }

        pixel_color /= (self.sqrt_spp * self.sqrt_spp) as Float;
        compute_color(&pixel_color)
    }

    /// Camera ray through a jittered point in the given stratified sub-cell
    /// of pixel (`x`, `y`), originating on the defocus disk when one is
    /// configured.
    fn get_ray_sample(
        &self,
        x: usize,
        y: usize,
        sample_row: usize,
        sample_column: usize,
        rng: &mut LcgRng,
    ) -> Ray3f {
        let offset = sample_square_stratified(sample_row, sample_column, self.inv_sqrt_spp, rng);

        let pixel_sample = self.pixel00_loc
            + ((y as Float + offset.y) * self.pixel_delta_v)
            + ((x as Float + offset.x) * self.pixel_delta_u);

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.lookfrom
        } else {
            sample_defocus_disk(&self.lookfrom, &self.defocus_disk_u, &self.defocus_disk_v, rng)
        };
        let ray_direction = pixel_sample - ray_origin;
        let ray_time = rng.next_float();

        Ray3f::new(ray_origin, ray_direction, Some(ray_time))
    }

    /// Recursive radiance estimator.
    pub fn ray_color(
        &self,
        ray: &Ray3f,
        depth: Int,
        scene: &Scene,
        rng: &mut LcgRng,
        stats: &mut RayStats,
    ) -> Color {
        // Bounce budget exhausted, no more light is gathered.
        if depth <= 0 {
            return BLACK;
        }

        let ray_t = Interval::new(scene.min_hit_distance, INFINITY);
        let rec = match scene.intersect(ray, ray_t) {
            Some(rec) => rec,
            None => {
                return if scene.sky_blend {
                    self.sky_blend(ray)
                } else {
                    scene.background
                };
            }
        };

        let color_from_emission = rec.material.emitted(ray, &rec);

        // A surface that does not scatter is purely emissive.
        let srec = match rec.material.scatter(ray, &rec, rng) {
            Some(srec) => srec,
            None => return color_from_emission,
        };

        match srec.scatter {
            // Delta distribution: follow the specular ray, no PDF division.
            Scatter::Specular { ray: specular_ray } => {
                if depth - 1 > 0 {
                    stats.count_bounce(srec.scatter_type);
                }
                let sample_color = self.ray_color(&specular_ray, depth - 1, scene, rng, stats);
                color_from_emission + srec.attenuation.component_mul(&sample_color)
            }
            Scatter::Diffuse { pdf: material_pdf } => {
                // Mix direct-light sampling with the material's own density
                // whenever the scene has importance-sampling targets.
                let lights_pdf;
                let mixture;
                let sampling_pdf: &dyn Pdf = if scene.lights().is_empty() {
                    material_pdf.as_ref()
                } else {
                    lights_pdf = HittablesPdf::new(scene.lights(), rec.p);
                    mixture = MixturePdf::new(&lights_pdf, material_pdf.as_ref());
                    &mixture
                };

                let scatter_direction = sampling_pdf.generate(rng);
                let scattered = Ray3f::new(rec.p, scatter_direction, Some(ray.time()));

                let sampling_pdf_value = sampling_pdf.value(&scatter_direction);
                let scattering_pdf_value =
                    rec.material.scattering_pdf_value(ray, &rec, &scattered);

                if depth - 1 > 0 {
                    stats.count_bounce(srec.scatter_type);
                }
                let sample_color = self.ray_color(&scattered, depth - 1, scene, rng, stats);

                let color_from_scatter = srec
                    .attenuation
                    .component_mul(&(scattering_pdf_value * sample_color))
                    / sampling_pdf_value;

                color_from_emission + color_from_scatter
            }
        }
    }

    fn sky_blend(&self, ray: &Ray3f) -> Color {
        let unit_direction = ray.dir().normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        lerp(a, &WHITE, &SKY_BLUE)
    }
}

/* Tests for Camera */
