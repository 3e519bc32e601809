use linefit::datasets::make_line;
use linefit::{SgdRegressor, metrics};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> linefit::Result<()> {
    env_logger::init();

    println!("=== SGD Linear Regression Example ===\n");

    // Five points on y = 2x - 2
    let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let y = [-6.0, -4.0, -2.0, 0.0, 2.0];

    let mut model = SgdRegressor::from_training_data(&x, &y);
    println!("Initial weight: {:.4}", model.weight());
    println!("Initial bias: {:.4}", model.bias());

    model.train(100, 0.1);

    println!("\nResults:");
    println!("Weight: {:.4}", model.weight());
    println!("Bias: {:.4}", model.bias());
    println!("Training MSE: {:.6}\n", model.training_loss()?);

    model.print_range(-5.0, 5.0, 0.5)?;

    // Noisy samples along y = -1.5x + 4
    println!("=== Noisy Data ===\n");
    let mut rng = StdRng::seed_from_u64(42);
    let (x_noisy, y_noisy) = make_line(40, -1.5, 4.0, 0.3, (-3.0, 3.0), &mut rng)?;

    let mut noisy = SgdRegressor::seeded(7);
    noisy.set_training_data(
        x_noisy.as_slice().unwrap_or_default(),
        y_noisy.as_slice().unwrap_or_default(),
    );
    noisy.train(200, 0.01);

    let predictions = noisy.predict_batch(&x_noisy);
    println!("Weight: {:.4} (true -1.5)", noisy.weight());
    println!("Bias: {:.4} (true 4.0)", noisy.bias());
    println!("R² score: {:.4}", noisy.score(&x_noisy, &y_noisy)?);
    println!(
        "MAE: {:.4}",
        metrics::mean_absolute_error(&y_noisy, &predictions)?
    );

    Ok(())
}
