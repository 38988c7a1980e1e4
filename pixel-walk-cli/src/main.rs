use std::fs;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::{Level, info};
use pixel_walk::{Canvas, CanvasConfig, Color, Interpreter, parser};

mod render;

use render::{RenderOptions, RendererType};

#[derive(Parser)]
#[command(name = "pixel-walk")]
#[command(about = "Interpreter for the Pixel-Walk drawing language", version)]
struct Cli {
    /// Подробность логов: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Исполняет программу и показывает холст
    Run {
        /// Исходник
        input: String,

        /// Сторона холста в клетках
        #[arg(short, long, default_value_t = 10)]
        size: usize,

        /// Предел выполненных инструкций
        #[arg(long, default_value_t = 1_000_000)]
        max_steps: usize,

        /// Куда выводить результат
        #[arg(short, long, default_value = "terminal")]
        format: String,

        /// Файл результата для файловых форматов
        #[arg(short, long)]
        output: Option<String>,

        /// Пикселей на клетку для картинки и окна
        #[arg(long, default_value_t = 16)]
        scale: usize,

        /// Буквы вместо цветов в терминале
        #[arg(long)]
        ascii: bool,

        /// Показать ast
        #[arg(long)]
        show_ast: bool,
    },

    /// Распарсить и показать токены и ast без исполнения
    Parse {
        /// Исходник
        input: String,
    },

    /// Список цветов палитры
    Colors,

    /// Список форматов вывода
    Formats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    simple_logger::init_with_level(log_level(cli.verbose))?;

    match cli.command {
        Commands::Run {
            input,
            size,
            max_steps,
            format,
            output,
            scale,
            ascii,
            show_ast,
        } => {
            let Some(renderer_type) = RendererType::all().into_iter().find(|r| r.name() == format) else {
                eprintln!("Unknown format: {}", format);
                return Ok(());
            };

            let source = fs::read_to_string(&input)?;
            let program = match parser::parse(&source) {
                Ok(program) => program,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };

            if show_ast {
                println!("=== AST ===");
                println!("{:#?}", program);
            }

            let config = CanvasConfig::with_size(size);
            let mut canvas = Canvas::from_config(&config)?;
            info!("Running {} on {}x{} canvas", input, size, size);

            let result = Interpreter::new(&mut canvas)
                .with_step_limit(max_steps)
                .execute(&program);

            // Рисуем даже после ошибки: всё, что успело выполниться, остаётся на холсте
            let output_path = match output {
                Some(path) => path,
                None => {
                    let base_name = input.trim_end_matches(".pw");
                    match renderer_type.extension() {
                        Some(extension) => format!("{}.{}", base_name, extension),
                        None => String::new(),
                    }
                }
            };
            let mut renderer = renderer_type.create(RenderOptions {
                palette: config.palette.clone(),
                output: output_path,
                scale,
                ascii,
            });
            renderer.render(&canvas)?;

            match summarize(&result, &canvas) {
                Ok(report) => println!("{}", report),
                Err(message) => {
                    eprintln!("{}", message);
                    process::exit(1);
                }
            }
        }
        Commands::Parse { input } => {
            println!("Parsing {}...", input);

            let source = fs::read_to_string(&input)?;

            println!("=== SOURCE ===");
            println!("{}", source);
            println!("=== TOKENS ===");

            let tokens = parser::lexer::tokenize(&source)?;
            for token in &tokens {
                let span = token.span;
                println!("{:3}:{:<3} {:>5}..{:<5} {:?} {}", span.line, span.column, span.start, span.end, token.kind, token.text);
            }

            println!("=== AST ===");
            match parser::parse(&source) {
                Ok(program) => {
                    for (index, statement) in program.statements.iter().enumerate() {
                        println!("{:4}  {:?}", index, statement);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            }
        }
        Commands::Colors => {
            let palette = CanvasConfig::default().palette;
            println!("Palette:");
            for color in Color::ALL {
                println!("  {} {:8} #{:06X}", color.index(), color.name(), palette.rgb(color));
            }
            println!("  - Transparent (readable only, cannot be used as the brush color)");
        }
        Commands::Formats => {
            println!("Supported formats:");
            for renderer in RendererType::all() {
                println!("  {:8} - {}", renderer.name(), renderer.description());
            }
        }
    }

    Ok(())
}

/// Итог прогона: отчёт для stdout или одна строка ошибки для stderr
fn summarize(result: &Result<usize, pixel_walk::Error>, canvas: &Canvas) -> Result<String, String> {
    match result {
        Ok(steps) => {
            let mut report = format!("Steps: {}", steps);
            if let Some(cursor) = canvas.cursor() {
                report.push_str(&format!("\nCursor: ({}, {})", cursor.x, cursor.y));
            }
            Ok(report)
        }
        Err(e) => Err(format!("Error: {}", e)),
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}
