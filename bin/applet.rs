use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod demo;
mod run;

#[derive(From, Subcommand)]
pub enum Applet {
    Demo(demo::Demo),
    Run(run::Run),
}

impl Default for Applet {
    fn default() -> Self {
        demo::Demo::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Demo(a) => Ok(a.execute()?),
            Applet::Run(a) => Ok(a.execute()?),
        }
    }
}
