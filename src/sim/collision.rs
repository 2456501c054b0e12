//! Collision and scoring geometry
//!
//! Coarse box tests: the avatar box against the screen bounds and against
//! the two solid bands of the lead obstacle.

use serde::{Deserialize, Serialize};

use super::state::{Avatar, Obstacle};
use crate::settings::Settings;

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    /// Bottom edge reached the ground line
    Ground,
    /// Avatar left the top of the screen entirely
    Ceiling,
    /// Avatar touched the lead obstacle's top band
    ObstacleTop,
    /// Avatar touched the lead obstacle's bottom band
    ObstacleBottom,
}

/// Ground/ceiling test
pub fn bounds_crash(avatar: &Avatar, ground_y: f32) -> Option<Crash> {
    if avatar.bottom() >= ground_y {
        Some(Crash::Ground)
    } else if avatar.bottom() <= 0.0 {
        Some(Crash::Ceiling)
    } else {
        None
    }
}

/// Obstacle test
///
/// Only the horizontal reach is checked, not whether the avatar has already
/// cleared the obstacle's right edge; the lead obstacle stays dangerous
/// until it is evicted.
pub fn obstacle_crash(avatar: &Avatar, obstacle: &Obstacle, ground_y: f32) -> Option<Crash> {
    if avatar.right() < obstacle.x {
        return None;
    }
    if avatar.y <= obstacle.top_y {
        Some(Crash::ObstacleTop)
    } else if avatar.bottom() >= obstacle.gap_bottom(ground_y) {
        Some(Crash::ObstacleBottom)
    } else {
        None
    }
}

/// Combined termination rule
pub fn check_crash(avatar: &Avatar, lead: Option<&Obstacle>, settings: &Settings) -> Option<Crash> {
    let ground_y = settings.ground_y();
    bounds_crash(avatar, ground_y).or_else(|| lead.and_then(|o| obstacle_crash(avatar, o, ground_y)))
}

/// Exact alignment of the avatar's x with the obstacle's x
///
/// This is an equality test, not a crossing test: it fires on exactly one
/// tick only when the obstacle speed lands on the avatar's x.
#[inline]
pub fn is_passing(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    avatar.x == obstacle.x
}

/// Whether the avatar's vertical extent lies entirely inside the open gap
#[inline]
pub fn is_in_gap(avatar: &Avatar, obstacle: &Obstacle, ground_y: f32) -> bool {
    avatar.y >= obstacle.top_y && avatar.bottom() <= obstacle.gap_bottom(ground_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar_at(y: f32) -> Avatar {
        let mut avatar = Avatar::new(&Settings::default());
        avatar.y = y;
        avatar
    }

    #[test]
    fn test_ground_and_ceiling() {
        assert_eq!(bounds_crash(&avatar_at(660.0), 700.0), Some(Crash::Ground));
        assert_eq!(bounds_crash(&avatar_at(659.0), 700.0), None);
        assert_eq!(bounds_crash(&avatar_at(-40.0), 700.0), Some(Crash::Ceiling));
        assert_eq!(bounds_crash(&avatar_at(-39.0), 700.0), None);
    }

    #[test]
    fn test_obstacle_out_of_reach() {
        let settings = Settings::default();
        // avatar right edge is 90
        let obstacle = Obstacle::new(91.0, 300.0, &settings);
        assert_eq!(obstacle_crash(&avatar_at(100.0), &obstacle, 700.0), None);
    }

    #[test]
    fn test_obstacle_bands() {
        let settings = Settings::default();
        // gap spans [200, 375]
        let obstacle = Obstacle::new(90.0, 200.0, &settings);
        assert_eq!(
            obstacle_crash(&avatar_at(200.0), &obstacle, 700.0),
            Some(Crash::ObstacleTop)
        );
        assert_eq!(
            obstacle_crash(&avatar_at(335.0), &obstacle, 700.0),
            Some(Crash::ObstacleBottom)
        );
        assert_eq!(obstacle_crash(&avatar_at(250.0), &obstacle, 700.0), None);
    }

    #[test]
    fn test_passed_obstacle_still_collides() {
        let settings = Settings::default();
        let obstacle = Obstacle::new(-50.0, 200.0, &settings);
        assert_eq!(
            obstacle_crash(&avatar_at(100.0), &obstacle, 700.0),
            Some(Crash::ObstacleTop)
        );
    }

    #[test]
    fn test_in_gap_is_inclusive() {
        let settings = Settings::default();
        let obstacle = Obstacle::new(300.0, 200.0, &settings);
        assert!(is_in_gap(&avatar_at(200.0), &obstacle, 700.0));
        assert!(is_in_gap(&avatar_at(335.0), &obstacle, 700.0));
        assert!(!is_in_gap(&avatar_at(199.0), &obstacle, 700.0));
        assert!(!is_in_gap(&avatar_at(336.0), &obstacle, 700.0));
    }

    #[test]
    fn test_passing_is_exact() {
        let settings = Settings::default();
        let avatar = avatar_at(300.0);
        assert!(is_passing(&avatar, &Obstacle::new(50.0, 200.0, &settings)));
        assert!(!is_passing(&avatar, &Obstacle::new(49.0, 200.0, &settings)));
        assert!(!is_passing(&avatar, &Obstacle::new(51.0, 200.0, &settings)));
    }

    #[test]
    fn test_bounds_checked_before_obstacle() {
        let settings = Settings::default();
        let obstacle = Obstacle::new(50.0, 200.0, &settings);
        assert_eq!(
            check_crash(&avatar_at(680.0), Some(&obstacle), &settings),
            Some(Crash::Ground)
        );
        assert_eq!(check_crash(&avatar_at(250.0), None, &settings), None);
    }
}
