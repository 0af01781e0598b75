use wallet_addressbook::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
