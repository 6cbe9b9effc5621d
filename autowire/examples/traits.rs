use fibre_autowire::{shared, Arguments, Callable, Injectable, Param, Result};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

impl Injectable for ReportService {
  const NAME: &'static str = "ReportService";

  fn constructor() -> Option<Vec<Param>> {
    // Trait objects are stored as `Arc<dyn Logger>` and reached through the "Logger" binding.
    Some(vec![Param::typed::<Arc<dyn Logger>>("logger", "Logger")])
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(ReportService {
      logger: args.next_value()?,
    })
  }
}

fn main() {
  // --- Registration ---
  shared().bind(
    "Logger",
    Callable::new(|| -> Arc<dyn Logger> { Arc::new(ConsoleLogger) }),
  );
  shared().register::<ReportService>();

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = shared().get_as::<ReportService>("ReportService").unwrap();

  println!("Using the service...");
  report_service.generate_report();
}
