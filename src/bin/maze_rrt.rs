//! Motion-primitive RRT demo on the bundled maze environment
//!
//! Grows the tree, reports the goal path cost and saves plots of the
//! primitive library and of the final plan. Set SAVE_FRAMES to also
//! dump one robot-pose frame per trajectory step for animation.

use std::f64::consts::PI;

use primitive_rrt::environment::{inflate_env, maze_small};
use primitive_rrt::visualization::Visualizer;
use primitive_rrt::{dubins_car_primitives, Point2D, Pose2D, RrtConfig, RrtPlanner};

const SAVE_FRAMES: bool = false;

fn main() {
    let robot_radius = 0.5;
    let env = maze_small(0.1);
    let obstacles = inflate_env(&env, robot_radius);
    let library = dubins_car_primitives(PI / 4.0, 1.0, 10);

    let config = RrtConfig {
        start: Pose2D::new(-8.0, -8.0, 0.0),
        goal: Point2D::new(8.0, -8.0),
        region_x: (-10.0, 10.0),
        region_y: (-10.0, 10.0),
        iterations: 6000,
        seed: 42,
        ..Default::default()
    };

    let mut vis = Visualizer::new();
    vis.set_title("Motion primitives");
    vis.plot_primitives(&library);
    if let Err(e) = vis.save_png("motionprimitive.png", 600, 600) {
        eprintln!("Failed to save primitive plot: {}", e);
    }

    let planner = match RrtPlanner::new(config, library, obstacles) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Planner setup failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Growing RRT: {} iterations, seed {}",
        planner.config().iterations,
        planner.config().seed
    );
    let tree = planner.plan();
    println!("Tree holds {} links", tree.len());

    let cost = planner.goal_path_length(&tree);
    match cost {
        Some(cost) => println!("Path found. Path length: {:.4}", cost),
        None => println!("Path not found."),
    }

    let mut vis = Visualizer::new();
    match cost {
        Some(cost) => vis.set_title(&format!("Cost of path: {:.4}", cost)),
        None => vis.set_title("No path"),
    };
    vis.set_x_range(-10.5, 10.5);
    vis.set_y_range(-10.5, 10.5);
    vis.plot_tree(&tree);
    vis.plot_goal_chain(&tree, planner.config().goal);
    vis.plot_environment(&env, planner.config().start.position(), planner.config().goal);
    if let Err(e) = vis.save_png("plan.png", 800, 600) {
        eprintln!("Failed to save plan plot: {}", e);
    }

    if SAVE_FRAMES && cost.is_some() {
        println!("Saving pose frames for animation...");
        let poses = planner.extract_poses(&tree);
        for (i, pose) in poses.iter().enumerate() {
            let mut frame = Visualizer::new();
            frame.set_x_range(-10.5, 10.5);
            frame.set_y_range(-10.5, 10.5);
            frame.plot_environment(&env, planner.config().start.position(), planner.config().goal);
            frame.plot_robot(pose, robot_radius);
            if let Err(e) = frame.save_png(&format!("pose_{}.png", i), 600, 600) {
                eprintln!("Failed to save frame {}: {}", i, e);
                break;
            }
        }
    }
}
