use lcd_core::{AnimationError, Color, FrameContext, Node, Point, Shape};

const STEPS: usize = 60;

/// A wavy beam of light travelling from `start_y` towards `end_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRay {
    pub x: f64,
    pub start_y: f64,
    pub end_y: f64,
    pub color: Color,
    /// Fraction of the path drawn so far.
    pub progress: f64,
    pub wave_amplitude: f64,
    /// Degrees; the wave flattens as the polarization turns towards the viewer.
    pub polarization_angle: f64,
    /// Blocked rays fade out over the last 40% of their travel.
    pub blocked: bool,
}

pub fn light_ray(ctx: &FrameContext, ray: &LightRay) -> Result<Node, AnimationError> {
    let length = (ray.end_y - ray.start_y).abs() * ray.progress;
    let direction = if ray.end_y > ray.start_y { 1.0 } else { -1.0 };
    let amplitude = ray.wave_amplitude * ray.polarization_angle.to_radians().cos();
    let phase = ctx.time() * 0.15;

    let points = (0..=STEPS)
        .map(|i| {
            let t = i as f64 / STEPS as f64;
            let y = ray.start_y + direction * t * length;
            let wave = (t * 12.0 + phase).sin() * amplitude;
            Point::new(ray.x + wave, y)
        })
        .collect();

    let opacity = if ray.blocked {
        lcd_core::ramp(ray.progress, [0.6, 1.0], [1.0, 0.1])?
    } else {
        0.8
    };

    Ok(Shape::polyline(points)
        .stroke(ray.color, 2.5)
        .round_cap()
        .opacity(opacity)
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_core::tree::Geometry;
    use lcd_core::Timeline;

    fn ray(progress: f64, blocked: bool) -> LightRay {
        LightRay {
            x: 100.0,
            start_y: 50.0,
            end_y: 450.0,
            color: Color::WHITE,
            progress,
            wave_amplitude: 6.0,
            polarization_angle: 0.0,
            blocked,
        }
    }

    fn shape(node: Node) -> Shape {
        match node {
            Node::Shape(shape) => shape,
            other => panic!("expected a shape, got {:?}", other),
        }
    }

    #[test]
    fn ray_grows_with_progress() {
        let ctx = lcd_core::FrameContext::new(0, &Timeline::new(10, 30, 100, 100).unwrap());
        let half = shape(light_ray(&ctx, &ray(0.5, false)).unwrap());
        match half.geometry {
            Geometry::Polyline { points } => {
                assert_eq!(points.len(), STEPS + 1);
                assert_eq!(points[0].y, 50.0);
                assert!((points[STEPS].y - 250.0).abs() < 1e-9);
            }
            other => panic!("unexpected geometry {:?}", other),
        }
        assert_eq!(half.opacity, 0.8);
    }

    #[test]
    fn blocked_ray_fades_near_the_end() {
        let ctx = lcd_core::FrameContext::new(0, &Timeline::new(10, 30, 100, 100).unwrap());
        assert_eq!(shape(light_ray(&ctx, &ray(0.3, true)).unwrap()).opacity, 1.0);
        let end = shape(light_ray(&ctx, &ray(1.0, true)).unwrap()).opacity;
        assert!((end - 0.1).abs() < 1e-12);
    }
}
