// src/bin/contour.rs
//
// Intégrale de contour : ligne de commande
// ----------------------------------------
//   contour <CENTRE> <RAYON> <N> <JETONS>...
//   contour "(0,0)" 1 1000 "(1,0)" z /        =>  (≈0,≈6.2831)
//
// Sortie : une seule valeur "(re,im)" + saut de ligne sur stdout.
// Erreur : message sur stderr, code 1.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;
    use tracing::debug;

    use integrale_contour::noyau::format::format_complexe;
    use integrale_contour::noyau::{integrer_jetons, Complexe, ResultatNoyau};

    #[derive(Parser, Debug)]
    #[command(
        name = "contour",
        about = "Intégrale d’une fonction complexe (RPN) sur un cercle, règle du point milieu"
    )]
    struct Args {
        /// Centre du cercle, forme "(re,im)"
        centre: Complexe,

        /// Rayon (> 0)
        #[arg(allow_negative_numbers = true)]
        rayon: f64,

        /// Nombre d’échantillons (≥ 1)
        n: usize,

        /// Jetons RPN : z, (re,im), + - * / ~ # ! ;
        // "-" seul est une valeur pour clap : pas besoin d’allow_hyphen_values
        #[arg(required = true, num_args = 1..)]
        jetons: Vec<String>,

        /// Échantillons évalués en parallèle (même résultat)
        #[arg(long)]
        parallele: bool,

        /// Décimales fixes au lieu de la forme canonique
        #[arg(long)]
        chiffres: Option<usize>,
    }

    /// Code de sortie d’un échec (argv valide, intégrale impossible).
    const CODE_ERREUR: i32 = 1;

    /// Texte à écrire sur stdout.
    fn executer(args: &Args) -> ResultatNoyau<String> {
        let valeur = integrer_jetons(args.centre, args.rayon, args.n, &args.jetons, args.parallele)?;
        Ok(format_complexe(valeur, args.chiffres))
    }

    pub fn main() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();

        let args = Args::parse();
        debug!(?args, "arguments");

        match executer(&args) {
            Ok(texte) => println!("{texte}"),
            Err(e) => {
                eprintln!("erreur: {e}");
                std::process::exit(CODE_ERREUR);
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
