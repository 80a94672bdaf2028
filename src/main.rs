use connect4::Game;
const W: usize = connect4::COLUMNS;
const H: usize = connect4::ROWS;
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut game = Game::<W, H>::new()?;
    let stdin = std::io::stdin();
    game.run(&mut stdin.lock(), &mut std::io::stdout())?;
    Ok(())
}
