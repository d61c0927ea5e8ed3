//! Teardrop lobes drawn from the central atom along each electron domain.
//!
//! A lobe is a string of translucent spheres whose radius follows a
//! [`TeardropProfile`]: it swells along a quarter sine wave up to the peak,
//! then tapers linearly to zero at the domain position. Bonded lobes are
//! capped with a ligand atom; lone-pair lobes carry two electron dots at
//! their midpoint instead.

use std::f32::consts::PI;

use glam::Vec3;

use super::geometry::perpendicular_vector;
use crate::catalog::{DomainKind, ElectronDomain};
use crate::options::Options;
use crate::primitives::Sphere;
use crate::surface::DrawingSurface;

/// Radius profile of a lobe as a function of `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeardropProfile {
    /// Maximum radius, reached at `t = peak`.
    pub amplitude: f32,
    /// Where the radius peaks. Must lie in `(0, 1)`.
    pub peak: f32,
}

impl TeardropProfile {
    /// The profile used by default lobes.
    pub const DEFAULT: Self = Self {
        amplitude: 0.8,
        peak: 0.8,
    };

    /// Build a profile.
    #[must_use]
    pub const fn new(amplitude: f32, peak: f32) -> Self {
        Self { amplitude, peak }
    }

    /// Radius at `t`. Zero at both ends, exactly `amplitude` at `peak`.
    #[inline]
    #[must_use]
    pub fn radius(&self, t: f32) -> f32 {
        if t <= self.peak {
            self.amplitude * (PI * t / (2.0 * self.peak)).sin()
        } else {
            self.amplitude * (1.0 - t) / (1.0 - self.peak)
        }
    }
}

impl Default for TeardropProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Teardrop radius at `t` for the given amplitude and peak position.
#[must_use]
pub fn teardrop_radius(t: f32, amplitude: f32, peak: f32) -> f32 {
    TeardropProfile::new(amplitude, peak).radius(t)
}

/// Sphere centers and radii along `direction` for `t = 1/steps ..
/// (steps-1)/steps`. The endpoints themselves are never sampled.
pub fn lobe_samples(
    direction: Vec3,
    steps: u32,
    profile: TeardropProfile,
) -> impl Iterator<Item = (Vec3, f32)> {
    let steps = steps.max(1);
    (1..steps).map(move |i| {
        let t = i as f32 / steps as f32;
        (direction * t, profile.radius(t))
    })
}

/// Emit the lobe for one domain, plus its ligand atom or electron dots.
pub(crate) fn emit_lobe<S: DrawingSurface>(
    surface: &mut S,
    domain: &ElectronDomain,
    options: &Options,
) {
    let geo = &options.geometry;
    let colors = &options.colors;
    let tip = domain.position;
    let color = match domain.kind {
        DomainKind::BondedPair => &colors.bond,
        DomainKind::LonePair => &colors.lone_pair,
    };

    let profile = TeardropProfile::new(geo.lobe_amplitude, geo.lobe_peak);
    for (center, radius) in lobe_samples(tip, geo.lobe_steps, profile) {
        surface.add_sphere(Sphere {
            center,
            radius,
            color: color.clone(),
            opacity: geo.lobe_opacity,
        });
    }

    match domain.kind {
        DomainKind::BondedPair => surface.add_sphere(Sphere {
            center: tip,
            radius: geo.ligand_radius,
            color: color.clone(),
            opacity: geo.ligand_opacity,
        }),
        DomainKind::LonePair => {
            let middle = tip * 0.5;
            let offset = perpendicular_vector(tip) * geo.electron_offset;
            for center in [middle + offset, middle - offset] {
                surface.add_sphere(Sphere {
                    center,
                    radius: geo.electron_radius,
                    color: colors.electron.clone(),
                    opacity: 1.0,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawingSurface, SceneRecorder};

    #[test]
    fn radius_vanishes_at_both_ends() {
        for (a, t0) in [(0.8, 0.8), (1.0, 0.5), (0.3, 0.1), (2.0, 0.95)] {
            assert!(teardrop_radius(0.0, a, t0).abs() < 1e-6);
            assert!(teardrop_radius(1.0, a, t0).abs() < 1e-6);
        }
    }

    #[test]
    fn radius_peaks_at_amplitude_and_is_continuous() {
        for (a, t0) in [(0.8, 0.8), (1.0, 0.5), (0.3, 0.1), (2.0, 0.95)] {
            let profile = TeardropProfile::new(a, t0);
            assert!((profile.radius(t0) - a).abs() < 1e-6);
            let eps = 1e-4;
            let left = profile.radius(t0 - eps);
            let right = profile.radius(t0 + eps);
            assert!((left - a).abs() < 1e-3, "left of peak: {left}");
            assert!((right - a).abs() < 1e-2, "right of peak: {right}");
        }
    }

    #[test]
    fn samples_skip_endpoints() {
        let direction = Vec3::new(0.0, 0.0, 2.5);
        let samples: Vec<_> =
            lobe_samples(direction, 20, TeardropProfile::DEFAULT).collect();
        assert_eq!(samples.len(), 19);
        let (first, _) = samples[0];
        let (last, _) = samples[18];
        assert!((first - direction * 0.05).length() < 1e-6);
        assert!((last - direction * 0.95).length() < 1e-6);
        assert!(samples.iter().all(|(_, r)| *r > 0.0));
    }

    #[test]
    fn bonded_lobe_ends_in_a_ligand() {
        let options = Options::default();
        let mut recorder = SceneRecorder::new("lobe");
        emit_lobe(
            &mut recorder,
            &ElectronDomain::bonded(2.5, 0.0, 0.0),
            &options,
        );
        let scene = recorder.finalize();
        let spheres: Vec<_> = scene.spheres().collect();

        assert_eq!(spheres.len(), 20);
        assert!(spheres.iter().all(|s| s.color == "lightblue"));
        assert!(spheres[..19].iter().all(|s| s.opacity == 0.6));
        let ligand = spheres[19];
        assert_eq!(ligand.center, Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(ligand.radius, 0.5);
        assert_eq!(ligand.opacity, 0.9);
    }

    #[test]
    fn lone_pair_lobe_carries_two_electrons() {
        let options = Options::default();
        let mut recorder = SceneRecorder::new("lobe");
        emit_lobe(
            &mut recorder,
            &ElectronDomain::lone_pair(0.0, 0.0, 2.5),
            &options,
        );
        let scene = recorder.finalize();
        let spheres: Vec<_> = scene.spheres().collect();

        assert_eq!(spheres.len(), 21);
        assert!(spheres[..19].iter().all(|s| s.color == "pink"));
        assert!(spheres
            .iter()
            .all(|s| s.center != Vec3::new(0.0, 0.0, 2.5)));

        let electrons = &spheres[19..];
        assert!(electrons.iter().all(|s| s.color == "black"
            && s.radius == 0.1
            && s.opacity == 1.0));
        // Vertical lobe: perpendicular is +X.
        assert_eq!(electrons[0].center, Vec3::new(0.1, 0.0, 1.25));
        assert_eq!(electrons[1].center, Vec3::new(-0.1, 0.0, 1.25));
    }

    #[test]
    fn tilted_lone_pair_straddles_its_midpoint_in_plane() {
        let tip = Vec3::new(-1.25, -2.165, 0.0);
        let mut recorder = SceneRecorder::new("lobe");
        emit_lobe(
            &mut recorder,
            &ElectronDomain::lone_pair(tip.x, tip.y, tip.z),
            &Options::default(),
        );
        let scene = recorder.finalize();
        let electrons: Vec<_> = scene.spheres().skip(19).collect();
        assert_eq!(electrons.len(), 2);

        let offset = Vec3::new(-tip.y, tip.x, 0.0).normalize() * 0.1;
        assert!((electrons[0].center - (tip * 0.5 + offset)).length() < 1e-6);
        assert!((electrons[1].center - (tip * 0.5 - offset)).length() < 1e-6);
        // The dots straddle the lobe axis, not the +X fallback.
        assert!(offset.dot(tip).abs() < 1e-6);
        assert!(electrons[0].center.x > tip.x * 0.5);
    }
}
