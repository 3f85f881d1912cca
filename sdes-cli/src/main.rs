use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use sdes::{Mode, PrimeTable, SBox, Sdes, SdesConfig};

/// SDES-Verschlüsselung
///
/// Ver- und entschlüsselt Textdateien mit dem vereinfachten DES über
/// dem B6-Alphabet.
#[derive(Parser)]
#[command(
    name = "sdes-cli",
    about = "Simplified DES encryption utility",
    long_about = "
Ver- und entschlüsselt Textdateien mit dem vereinfachten DES:
1. Zeichen außerhalb des B6-Alphabets passieren unverändert
2. Der Rest wird mit 6 Bit pro Zeichen kodiert und in Blöcke geteilt
3. Eine Feistel-Chiffre mit BBS-Schlüssel verarbeitet jeden Block
4. Als Betriebsmodi stehen ECB, CBC und OFB zur Verfügung

Der Schlüssel wird aus den Blum-Primzahlen p und q abgeleitet.
S-Boxen und Primzahltabelle können aus Dateien geladen werden.
"
)]
#[command(version)]
struct Args {
    /// Eingabedatei mit dem zu verarbeitenden Text
    #[arg(long, value_name = "EINGABE")]
    file: PathBuf,

    /// Ausgabedatei für das Ergebnis
    #[arg(long, value_name = "AUSGABE")]
    output: PathBuf,

    /// Verschlüsseln oder Entschlüsseln
    #[arg(long, value_enum)]
    operation: Operation,

    /// Betriebsmodus der Chiffre
    #[arg(long, value_enum)]
    mode: ChainingMode,

    /// Anzahl der Feistel-Runden (mindestens 2)
    #[arg(long)]
    rounds: Option<usize>,

    /// Blockgröße in Bit (gerade, mindestens 4)
    #[arg(long)]
    block_size: Option<usize>,

    /// Blum-Primzahl p (kongruent 3 mod 4)
    #[arg(long)]
    p: Option<u64>,

    /// Blum-Primzahl q (kongruent 3 mod 4)
    #[arg(long)]
    q: Option<u64>,

    /// Füllzeichen für unvollständige Blöcke
    #[arg(long)]
    pad: Option<char>,

    /// Datei mit der ersten S-Box
    #[arg(long, value_name = "SBOX1")]
    sbox1: Option<PathBuf>,

    /// Datei mit der zweiten S-Box
    #[arg(long, value_name = "SBOX2")]
    sbox2: Option<PathBuf>,

    /// Datei mit der Primzahltabelle (eine Primzahl pro Zeile)
    #[arg(long, value_name = "PRIMZAHLEN")]
    primes: Option<PathBuf>,
}

/// Richtung der Verarbeitung
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Operation {
    /// Klartext verschlüsseln
    Encrypt,
    /// Geheimtext entschlüsseln
    Decrypt,
}

/// Betriebsmodus der Blockchiffre
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChainingMode {
    /// Electronic Code Book
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Output Feedback
    Ofb,
}

impl From<ChainingMode> for Mode {
    fn from(mode: ChainingMode) -> Self {
        match mode {
            ChainingMode::Ecb => Mode::Ecb,
            ChainingMode::Cbc => Mode::Cbc,
            ChainingMode::Ofb => Mode::Ofb,
        }
    }
}

/// Baut die Konfiguration aus den Kommandozeilen-Parametern
///
/// Nicht angegebene Parameter behalten ihre Standardwerte; jeder Override
/// läuft durch die validierenden Setter der Konfiguration.
fn build_config(args: &Args) -> Result<SdesConfig, Box<dyn std::error::Error>> {
    let mut config = SdesConfig::new()?;

    if let Some(rounds) = args.rounds {
        config.set_rounds(rounds)?;
    }
    if let Some(block_size) = args.block_size {
        config.set_block_size(block_size)?;
    }
    if let Some(p) = args.p {
        config.set_p(p)?;
    }
    if let Some(q) = args.q {
        config.set_q(q)?;
    }
    if let Some(pad) = args.pad {
        config.set_pad(pad)?;
    }
    if let Some(path) = &args.sbox1 {
        config.set_sbox1(SBox::from_file(path)?)?;
    }
    if let Some(path) = &args.sbox2 {
        config.set_sbox2(SBox::from_file(path)?)?;
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = build_config(&args)?;

    // Eigene Primzahltabelle wird vor der Benutzung geprüft
    let sdes = match &args.primes {
        Some(path) => {
            let primes = PrimeTable::load(path)?;
            primes.validate()?;
            Sdes::with_resources(config, primes)
        }
        None => Sdes::with_config(config)?,
    };

    let content = fs::read_to_string(&args.file)
        .map_err(|e| format!("Fehler beim Lesen von {}: {}", args.file.display(), e))?;

    let mode = Mode::from(args.mode);
    let result = match args.operation {
        Operation::Encrypt => sdes.encrypt(&content, mode)?,
        Operation::Decrypt => sdes.decrypt(&content, mode)?,
    };

    // Erstelle Elternverzeichnis falls nötig
    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, &result)
        .map_err(|e| format!("Fehler beim Schreiben in {}: {}", args.output.display(), e))?;

    println!(
        "{} Zeichen im {}-Modus verarbeitet, Ausgabe in {}",
        result.chars().count(),
        mode,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_defaults() -> Args {
        Args {
            file: PathBuf::from("in.txt"),
            output: PathBuf::from("out.txt"),
            operation: Operation::Encrypt,
            mode: ChainingMode::Ecb,
            rounds: None,
            block_size: None,
            p: None,
            q: None,
            pad: None,
            sbox1: None,
            sbox2: None,
            primes: None,
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&args_with_defaults()).unwrap();
        assert_eq!(config.rounds(), 2);
        assert_eq!(config.block_size(), 12);
        assert_eq!(config.key_length(), 9);
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let mut args = args_with_defaults();
        args.rounds = Some(4);
        args.block_size = Some(16);
        args.pad = Some('x');

        let config = build_config(&args).unwrap();
        assert_eq!(config.rounds(), 4);
        assert_eq!(config.block_size(), 16);
        assert_eq!(config.key_length(), 11);
        assert_eq!(config.pad(), 'x');
    }

    #[test]
    fn test_build_config_rejects_invalid_values() {
        let mut args = args_with_defaults();
        args.rounds = Some(1);
        assert!(build_config(&args).is_err());

        let mut args = args_with_defaults();
        args.p = Some(13);
        assert!(build_config(&args).is_err());
    }
}
