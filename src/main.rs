use clap::Parser;
use langtons_ant::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut sim = Simulation::new(args.origin);
    log::info!(
        "running {} steps from {} in batches of {}",
        args.steps,
        args.origin,
        args.batch
    );

    let quiet = args.quiet;
    let simulation_time = sim.run_batches(args.steps, args.batch, |snap| {
        if !quiet {
            log::debug!(
                "step {}: ant={} heading={} black={}",
                snap.steps,
                snap.ant.position,
                snap.ant.heading,
                snap.black_cells.len()
            );
        }
    });
    log::info!("finished after {} steps", sim.ant().steps());

    if args.print_cells {
        sim.print_cells();
    }
    sim.print_summary(simulation_time);

    Ok(())
}
