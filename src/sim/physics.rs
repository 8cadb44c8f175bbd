//! Player gravity, stance changes, obstacle scrolling

use super::state::{Obstacle, Player, Stance};
use crate::tuning::Tuning;

/// Apply gravity and integrate, clamping to the ground line
pub fn integrate_player(player: &mut Player, tuning: &Tuning, dt: f32) {
    player.vel_y += tuning.gravity * dt;
    player.pos.y += player.vel_y * dt;

    let floor = tuning.ground_y() - player.size.y;
    if player.pos.y >= floor {
        player.pos.y = floor;
        player.vel_y = 0.0;
        player.on_ground = true;
    }
}

/// Leave the ground. Returns false if already airborne.
///
/// A ducking player stands up first so the jump starts from full height
/// and the stance can't get stuck while airborne.
pub fn jump(player: &mut Player, tuning: &Tuning) -> bool {
    if !player.on_ground {
        return false;
    }
    if player.is_ducking() {
        set_stance(player, Stance::Normal, tuning);
    }
    player.vel_y = -tuning.jump_velocity;
    player.on_ground = false;
    true
}

/// Change stance, keeping the feet on the ground line.
///
/// Only honoured on the ground; returns true if the stance changed.
pub fn set_stance(player: &mut Player, stance: Stance, tuning: &Tuning) -> bool {
    if !player.on_ground || player.stance == stance {
        return false;
    }
    player.stance = stance;
    player.size.y = match stance {
        Stance::Normal => tuning.normal_height,
        Stance::Ducking => tuning.duck_height,
    };
    player.pos.y = tuning.ground_y() - player.size.y;
    true
}

/// Linear, unbounded speed ramp
#[inline]
pub fn ramp_speed(speed: f32, tuning: &Tuning, dt: f32) -> f32 {
    speed + tuning.speed_accel * dt
}

/// Move obstacles left and drop the ones whose right edge passed x = 0
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, dt: f32) {
    let dx = speed * dt;
    for obs in obstacles.iter_mut() {
        obs.pos.x -= dx;
    }
    obstacles.retain(|o| !o.is_off_screen());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::ObstacleKind;
    use glam::Vec2;

    #[test]
    fn test_grounded_player_stays_put() {
        let tuning = Tuning::default();
        let mut player = Player::standing(&tuning);
        let start = player.pos;
        for _ in 0..10 {
            integrate_player(&mut player, &tuning, SIM_DT);
        }
        assert_eq!(player.pos, start);
        assert!(player.on_ground);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_jump_arc_lands() {
        let tuning = Tuning::default();
        let mut player = Player::standing(&tuning);
        let ground_top = player.pos.y;

        assert!(jump(&mut player, &tuning));
        assert!(!jump(&mut player, &tuning), "no double jump");

        let mut highest = ground_top;
        let mut ticks = 0;
        while !player.on_ground {
            integrate_player(&mut player, &tuning, SIM_DT);
            highest = highest.min(player.pos.y);
            ticks += 1;
            assert!(ticks < 1000, "never landed");
        }

        let apex = ground_top - highest;
        assert!(apex > tuning.ground_obstacle_height);
        assert!(apex <= tuning.jump_apex());
        assert_eq!(player.pos.y, ground_top);
        // v / g * 2 = 0.5 s airtime, about 60 ticks
        assert!((55..=65).contains(&ticks));
    }

    #[test]
    fn test_duck_reanchors_feet() {
        let tuning = Tuning::default();
        let mut player = Player::standing(&tuning);

        assert!(set_stance(&mut player, Stance::Ducking, &tuning));
        assert_eq!(player.size.y, tuning.duck_height);
        assert_eq!(player.rect().bottom(), tuning.ground_y());
        assert!(!set_stance(&mut player, Stance::Ducking, &tuning));

        assert!(set_stance(&mut player, Stance::Normal, &tuning));
        assert_eq!(player.size.y, tuning.normal_height);
        assert_eq!(player.rect().bottom(), tuning.ground_y());
    }

    #[test]
    fn test_no_duck_in_air() {
        let tuning = Tuning::default();
        let mut player = Player::standing(&tuning);
        jump(&mut player, &tuning);
        integrate_player(&mut player, &tuning, SIM_DT);
        assert!(!set_stance(&mut player, Stance::Ducking, &tuning));
        assert_eq!(player.stance, Stance::Normal);
    }

    #[test]
    fn test_jump_from_duck_stands_up() {
        let tuning = Tuning::default();
        let mut player = Player::standing(&tuning);
        set_stance(&mut player, Stance::Ducking, &tuning);
        assert!(jump(&mut player, &tuning));
        assert_eq!(player.stance, Stance::Normal);
        assert_eq!(player.size.y, tuning.normal_height);
    }

    #[test]
    fn test_scroll_and_cull() {
        let mut obstacles = vec![
            Obstacle {
                id: 1,
                kind: ObstacleKind::Ground,
                pos: Vec2::new(-40.0, 230.0),
                size: Vec2::new(50.0, 60.0),
            },
            Obstacle {
                id: 2,
                kind: ObstacleKind::Aerial,
                pos: Vec2::new(400.0, 160.0),
                size: Vec2::new(80.0, 60.0),
            },
        ];

        // First obstacle's right edge goes from 10 to exactly 0
        scroll_obstacles(&mut obstacles, 100.0, 0.1);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 2);
        assert_eq!(obstacles[0].pos.x, 390.0);
    }

    #[test]
    fn test_speed_ramp() {
        let tuning = Tuning::default();
        let speed = ramp_speed(600.0, &tuning, 0.5);
        assert_eq!(speed, 609.0);
    }
}
