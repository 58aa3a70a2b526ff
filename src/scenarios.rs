// Fixed demonstration runs
//
// Each scenario wires up a toy setup, drives it, and returns the narration in
// the order it happened. Components narrate silently into their own sinks; the
// transcript drains them after every step so lines interleave correctly.

use crate::command::remote::{
    CeilingFanCommand, FanSpeed, GarageDoorDownCommand, GarageDoorUpCommand, LightOffCommand,
    LightOnCommand, StereoOffCommand, StereoOnWithCdCommand,
};
use crate::command::{
    CancelOrderCommand, CommandError, CommandManager, Home, OrderService, PlaceOrderCommand,
    RemoteControl, ShipOrderCommand, UndoableCommand,
};
use crate::config::LabConfig;
use crate::decorator::{
    AuthDecorator, BaseHandler, CacheDecorator, Handler, LoggingDecorator, Request,
};
use crate::facade::HomeTheaterFacade;
use crate::iterator::{Component, Playlist, Song};
use crate::messaging::{Narrator, NotificationCategory};
use crate::observer::{Product, User};
use crate::proxy::{BankAccount, BankAccountProxy, RealBankAccount};
use crate::state::{MusicPlayer, TcpConnection};
use crate::strategy::{BitcoinPayment, CreditCardPayment, PayPalPayment, PaymentProcessor};
use crate::template::{
    CaffeineBeverage, Coffee, CsvExporter, DataExporter, ExportError, JsonExporter, Tea,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

pub type ScenarioResult = Result<Vec<String>, ScenarioError>;

/// Ordered collection of narration lines for one scenario
struct Transcript {
    narrator: Narrator,
}

impl Transcript {
    fn new(config: &LabConfig, category: NotificationCategory) -> Self {
        Self {
            narrator: Narrator::with_echo(category, config.echo),
        }
    }

    fn line(&mut self, message: impl Into<String>) {
        self.narrator.info(message);
    }

    fn absorb(&mut self, source: &mut Narrator) {
        for notification in source.drain() {
            self.narrator.push(notification);
        }
    }

    fn finish(self) -> Vec<String> {
        self.narrator.messages()
    }
}

fn silent(category: NotificationCategory) -> Narrator {
    Narrator::silent(category)
}

/// Place, ship, attempt to cancel, then undo the rejected cancel
pub fn order_history(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Command);
    let mut service = OrderService::with_narrator(silent(NotificationCategory::Command));
    let mut manager: CommandManager<OrderService> =
        CommandManager::with_narrator(config.history_limit, silent(NotificationCategory::Command));

    let commands: Vec<Box<dyn UndoableCommand<OrderService>>> = vec![
        Box::new(PlaceOrderCommand::new("ORD-1001")),
        Box::new(ShipOrderCommand::new("ORD-1001")),
        // Rejected: the order has already shipped
        Box::new(CancelOrderCommand::new("ORD-1001")),
    ];

    for command in commands {
        manager.execute_command(command, &mut service)?;
        transcript.absorb(service.narrator_mut());
    }

    transcript.line("");
    manager.undo_last(&mut service)?;
    transcript.absorb(manager.narrator_mut());
    transcript.absorb(service.narrator_mut());

    transcript.line("");
    transcript.line("Final order states:");
    for (id, status) in service.orders() {
        transcript.line(format!("{}: {}", id, status));
    }

    Ok(transcript.finish())
}

/// Program a remote, press every button, then exercise single-step undo
pub fn remote_control(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Remote);
    let mut home = Home::with_narrator(silent(NotificationCategory::Remote));
    let mut remote = RemoteControl::new(config.remote_slots);

    let living_room_light = home.add_light("Living Room");
    let kitchen_light = home.add_light("Kitchen");
    let ceiling_fan = home.add_ceiling_fan("Living Room");
    let stereo = home.add_stereo("Living Room");
    let garage_door = home.add_garage_door("");

    type Pair = (
        Box<dyn UndoableCommand<Home>>,
        Box<dyn UndoableCommand<Home>>,
    );
    let pairs: Vec<Pair> = vec![
        (
            Box::new(LightOnCommand::new(living_room_light)),
            Box::new(LightOffCommand::new(living_room_light)),
        ),
        (
            Box::new(LightOnCommand::new(kitchen_light)),
            Box::new(LightOffCommand::new(kitchen_light)),
        ),
        (
            Box::new(CeilingFanCommand::new(ceiling_fan, FanSpeed::High)),
            Box::new(CeilingFanCommand::off(ceiling_fan)),
        ),
        (
            Box::new(StereoOnWithCdCommand::new(stereo)),
            Box::new(StereoOffCommand::new(stereo)),
        ),
        (
            Box::new(GarageDoorUpCommand::new(garage_door)),
            Box::new(GarageDoorDownCommand::new(garage_door)),
        ),
    ];

    let assigned = pairs.len().min(remote.slot_count());
    for (slot, (on, off)) in pairs.into_iter().take(assigned).enumerate() {
        remote.set_command(slot, on, off)?;
    }

    for line in remote.to_string().lines() {
        transcript.line(line);
    }

    for slot in 0..assigned {
        remote.on_button_was_pushed(slot, &mut home)?;
        remote.off_button_was_pushed(slot, &mut home)?;
        transcript.absorb(home.narrator_mut());
    }

    if assigned > 0 {
        transcript.line("");
        remote.on_button_was_pushed(0, &mut home)?;
        remote.off_button_was_pushed(0, &mut home)?;
        transcript.absorb(home.narrator_mut());
        for line in remote.to_string().lines() {
            transcript.line(line);
        }
        remote.undo_button_was_pushed(&mut home)?;
        transcript.absorb(home.narrator_mut());
    }

    Ok(transcript.finish())
}

/// Walk a connection through its handshake and repeated events
pub fn tcp_connection(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::State);
    let mut connection = TcpConnection::with_narrator(silent(NotificationCategory::State));

    connection.open();
    connection.acknowledge();
    connection.acknowledge();
    connection.close();
    connection.close();
    transcript.absorb(connection.narrator_mut());

    transcript.line(format!("Final state: {}", connection.state()));
    Ok(transcript.finish())
}

pub fn music_player(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::State);
    let mut player = MusicPlayer::with_narrator(silent(NotificationCategory::State));

    player.press_play();
    player.press_pause();
    player.press_play();
    player.press_stop();
    player.press_pause();
    transcript.absorb(player.narrator_mut());

    Ok(transcript.finish())
}

/// Ordered and shuffled playback, then the cursor's remove contract
pub fn playlist(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Iterator);
    let mut playlist = Playlist::new();
    playlist.add_song(Song::new("Bohemian Rhapsody", "Queen"));
    playlist.add_song(Song::new("Imagine", "John Lennon"));
    playlist.add_song(Song::new("Billie Jean", "Michael Jackson"));

    transcript.line("Playing songs in order:");
    for song in &playlist {
        transcript.line(song.to_string());
    }

    let mut rng = match config.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    transcript.line("");
    transcript.line("Playing songs shuffled:");
    for song in playlist.shuffled(&mut rng) {
        transcript.line(song.to_string());
    }

    transcript.line("");
    let mut cursor = playlist.cursor();
    if let Err(err) = cursor.remove() {
        transcript.narrator.error(format!("Cursor misuse: {}", err));
    }
    cursor.next_song();
    cursor.next_song();
    match cursor.remove() {
        Ok(song) => transcript.line(format!("Removed {}", song)),
        Err(err) => transcript.narrator.error(format!("Cursor misuse: {}", err)),
    }
    transcript.line(format!("{} songs left", playlist.len()));

    Ok(transcript.finish())
}

/// Display a folder tree, then flatten it with the depth-first iterator
pub fn file_tree(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Composite);
    let root = Component::folder_with(
        "Root",
        [
            Component::folder_with(
                "Documents",
                [Component::file("file1.txt"), Component::file("file2.txt")],
            ),
            Component::folder_with("Photos", [Component::file("file3.txt")]),
            Component::file("readme.md"),
        ],
    );

    transcript.line("Display structure:");
    for line in root.display_lines() {
        transcript.line(line);
    }

    transcript.line("");
    transcript.line("Iterate over all components:");
    for component in &root {
        let kind = if component.is_folder() { "Folder" } else { "File" };
        transcript.line(format!("{}: {}", kind, component.name()));
    }

    Ok(transcript.finish())
}

/// Valid request, the same request again (cached), then one without a token
pub fn request_pipeline(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Decorator);
    let mut narrator = silent(NotificationCategory::Decorator);
    let mut handler = CacheDecorator::new(LoggingDecorator::new(AuthDecorator::new(
        BaseHandler,
        config.auth_token.clone(),
    )));

    let valid = Request::new("Alice").with_token(config.auth_token.clone());
    let invalid = Request::new("Bob");
    let requests = [
        ("Request 1", &valid),
        ("Request 2 (cached)", &valid),
        ("Request 3 (unauthorized)", &invalid),
    ];

    for (label, request) in requests {
        transcript.line(format!("---- {} ----", label));
        let response = handler.handle(request, &mut narrator);
        transcript.absorb(&mut narrator);
        transcript.line(format!("=> {}", response));
    }

    Ok(transcript.finish())
}

/// Start a movie through the facade, then shut everything down
pub fn home_theater(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Facade);
    let mut theater = HomeTheaterFacade::with_narrator(silent(NotificationCategory::Facade));

    theater.watch_movie("Raiders of the Lost Ark");
    transcript.absorb(theater.narrator_mut());
    transcript.line("");
    theater.end_movie();
    transcript.absorb(theater.narrator_mut());

    Ok(transcript.finish())
}

/// One amount paid three ways by swapping the processor's strategy
pub fn payments(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Strategy);
    let amount = 49.99;
    let mut processor = PaymentProcessor::with_narrator(
        Box::new(CreditCardPayment::new("1234567890123456", "12/25")),
        silent(NotificationCategory::Strategy),
    );

    processor.checkout(amount);
    processor.set_strategy(Box::new(PayPalPayment::new("user@example.com")));
    processor.checkout(amount);
    processor.set_strategy(Box::new(BitcoinPayment::new(
        "1FfmbHfnpaZjKFvyi1okTjJJusN455paPH",
    )));
    processor.checkout(amount);
    transcript.absorb(processor.narrator_mut());

    Ok(transcript.finish())
}

/// Two shoppers subscribe, one leaves, the product restocks twice
pub fn stock_alerts(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Observer);
    let mut product: Product<User> =
        Product::with_narrator("iPhone 15 Pro Max", silent(NotificationCategory::Observer));

    product.subscribe(User::new("Alice"));
    let bob = product.subscribe(User::new("Bob"));

    product.set_stock(true);
    product.unsubscribe(bob);
    product.set_stock(false);
    product.set_stock(true);
    transcript.absorb(product.narrator_mut());

    Ok(transcript.finish())
}

/// Exporters with and without the compress hook, then two beverages
pub fn exporters_and_beverages(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Template);
    let mut narrator = silent(NotificationCategory::Template);
    let rows = vec![
        vec![json!("name"), json!("age")],
        vec![json!("Alice"), json!(30)],
        vec![json!("Bob"), json!(25)],
    ];

    transcript.line("CSV Export with compression:");
    CsvExporter.export(&rows, &mut narrator)?;
    transcript.absorb(&mut narrator);

    transcript.line("");
    transcript.line("JSON Export without compression:");
    JsonExporter.export(&rows, &mut narrator)?;
    transcript.absorb(&mut narrator);

    let beverages: [Box<dyn CaffeineBeverage>; 2] = [Box::new(Tea), Box::new(Coffee::new(false))];
    for beverage in beverages {
        transcript.line("");
        transcript.line(format!("Making {}...", beverage.name().to_lowercase()));
        beverage.prepare_recipe(&mut narrator);
        transcript.absorb(&mut narrator);
    }

    Ok(transcript.finish())
}

/// Owner and stranger sessions through the protection proxy
pub fn bank_proxy(config: &LabConfig) -> ScenarioResult {
    let mut transcript = Transcript::new(config, NotificationCategory::Proxy);
    let mut narrator = silent(NotificationCategory::Proxy);
    let mut account = RealBankAccount::new("Alice", 1000);

    let sessions: [(&str, u64); 3] = [("Alice", 300), ("Bob", 200), ("Alice", 5000)];
    for (i, (user, amount)) in sessions.into_iter().enumerate() {
        if i > 0 {
            transcript.line("");
        }
        transcript.line(format!("Logged in as {}:", user));
        let mut proxy = BankAccountProxy::new(&mut account, user);
        proxy.view_balance(&mut narrator);
        proxy.withdraw(amount, &mut narrator);
        transcript.absorb(&mut narrator);
    }

    Ok(transcript.finish())
}

/// Every scenario in order, each under its own heading
pub fn run_all(config: &LabConfig) -> ScenarioResult {
    let scenarios: [(&str, fn(&LabConfig) -> ScenarioResult); 12] = [
        ("Strategy: payments", payments),
        ("Observer: stock alerts", stock_alerts),
        ("Command: order history", order_history),
        ("Command: remote control", remote_control),
        ("Facade: home theater", home_theater),
        ("Template Method: exporters and beverages", exporters_and_beverages),
        ("State: TCP connection", tcp_connection),
        ("State: music player", music_player),
        ("Iterator: playlist", playlist),
        ("Composite: file tree", file_tree),
        ("Decorator: request pipeline", request_pipeline),
        ("Proxy: bank account", bank_proxy),
    ];

    let mut lines = Vec::new();
    for (title, scenario) in scenarios {
        let heading = format!("=== {} ===", title);
        if config.echo {
            println!("\n{}", heading);
        }
        lines.push(heading);
        lines.extend(scenario(config)?);
    }
    Ok(lines)
}
