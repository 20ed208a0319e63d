/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use powf32::{MathErrorKind, count_ulp, f_powf, f_powf_checked};
use rand::Rng;

struct UlpReport {
    peak: f64,
    worst: (f32, f32),
    above_half: usize,
}

impl UlpReport {
    fn new() -> Self {
        Self {
            peak: 0.,
            worst: (0., 0.),
            above_half: 0,
        }
    }

    fn add(&mut self, ulp: f64, x: f32, y: f32) {
        if ulp > 0.5 {
            self.above_half += 1;
        }
        if ulp > self.peak {
            self.peak = ulp;
            self.worst = (x, y);
        }
    }
}

fn main() {
    let mut rng = rand::rng();
    let mut ours = UlpReport::new();
    let mut libm_report = UlpReport::new();
    let mut exceptions = [0usize; 4];
    let samples = 2_000_000;
    for _ in 0..samples {
        let x = f32::from_bits(rng.random_range(1..0x7f80_0000u32));
        let lx = (x as f64).log2();
        if lx == 0. {
            continue;
        }
        let y = (rng.random_range(-1.05f64..1.05) * (128. / lx.abs()).min(1e30)) as f32;
        match f_powf_checked(x, y) {
            Ok(_) => {}
            Err(e) => {
                let slot = match e.kind() {
                    MathErrorKind::Invalid => 0,
                    MathErrorKind::DivideByZero => 1,
                    MathErrorKind::Overflow => 2,
                    MathErrorKind::Underflow => 3,
                };
                exceptions[slot] += 1;
                continue;
            }
        }
        let reference = (x as f64).powf(y as f64);
        if reference >= f32::MAX as f64 {
            continue;
        }
        ours.add(count_ulp(f_powf(x, y), reference), x, y);
        libm_report.add(count_ulp(libm::powf(x, y), reference), x, y);
    }

    println!("samples: {}", samples);
    println!(
        "powf32 ULP peak {} at {:?}, results above 0.5 ULP {}",
        ours.peak, ours.worst, ours.above_half
    );
    println!(
        "libm   ULP peak {} at {:?}, results above 0.5 ULP {}",
        libm_report.peak, libm_report.worst, libm_report.above_half
    );
    println!(
        "exceptions: invalid {}, divide by zero {}, overflow {}, underflow {}",
        exceptions[0], exceptions[1], exceptions[2], exceptions[3]
    );
}
