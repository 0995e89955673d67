//! Rational coefficients for the SaS point-5 lower quantile.
//!
//! Body segments on `[0.125, 0.5]` are fitted in `upper - p`. Tail bins are
//! fitted in `t = -log2(p * 2^k)` and describe `p^2 * |Q(p)|`.

use super::quantile::ExponentBin;
use super::rational::{Pade, Segment};

const PADE_0P125_0P15625: Pade = Pade {
    numer: &[
        4.49147047287704191198e0,
        3.71414591873162733815e1,
        1.03480125109733625638e2,
        1.00005220470908823354e2,
        2.74730973141070583590e0,
        -1.49189870645073451633e1,
    ],
    denom: &[
        1.00000000000000000000e0,
        -7.40327929970295513340e0,
        -2.07000208788561899835e1,
        1.26466884410752108685e2,
        2.98398241252531847810e2,
        2.44953613390623685184e1,
        -3.01956129294066642747e1,
    ],
};

const PADE_0P15625_0P1875: Pade = Pade {
    numer: &[
        2.83944503273842706084e0,
        1.67404492991634154469e1,
        2.61760101641248660785e1,
        4.92318752899232235761e0,
        -1.33297300307054215288e0,
    ],
    denom: &[
        1.00000000000000000000e0,
        -7.91824101512135661001e0,
        -4.36560728869362624099e-1,
        7.35318086832885976497e1,
        1.23880777723503405014e1,
    ],
};

const PADE_0P1875_0P25: Pade = Pade {
    numer: &[
        1.28383277518932773555e0,
        1.54688305214846834739e1,
        6.21226143476123511484e1,
        8.79420018191270817296e1,
        1.79710864893179400702e1,
        -4.36296483289971333525e0,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.53476487482968293892e-1,
        -3.27465714746398966728e1,
        1.45811276737475915785e0,
        2.40881382059354704440e2,
        4.56347287861047693971e1,
    ],
};

const PADE_0P25_0P3125: Pade = Pade {
    numer: &[
        6.21997830440617022638e-1,
        8.11360490622525648490e0,
        3.54777843088616889615e1,
        5.57432092610261643096e1,
        1.52522387203702199687e1,
        -2.61310790608187412340e0,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.51582630412651833313e0,
        -2.40350415645727043604e1,
        -1.99617786212255367547e1,
        1.43144810168931016975e2,
        3.94332982945258486603e1,
    ],
};

const PADE_0P3125_0P375: Pade = Pade {
    numer: &[
        2.93390030300024489254e-1,
        5.16683967106977943664e0,
        2.97430566765511734325e1,
        6.04452611872185179046e1,
        2.33091461217488287282e1,
        -2.53187049065204826355e0,
    ],
    denom: &[
        1.00000000000000000000e0,
        4.70163738422098119446e0,
        -2.04200239512608550672e1,
        -5.86169085045103369448e1,
        1.38804873716322353304e2,
        6.12970262611389719488e1,
    ],
};

const PADE_0P375_0P4375: Pade = Pade {
    numer: &[
        1.12403044179836065451e-1,
        9.66281090097717968770e0,
        2.82936597616711818703e2,
        3.70468489885038565990e3,
        2.20859955075149305099e4,
        4.88019507624858356395e4,
        4.74293142423451556386e3,
        -4.39007128051960125520e3,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.64372788710680763873e1,
        1.14299363729551464845e3,
        5.21928413581303380919e3,
        -1.48642173255156825356e4,
        -7.79821178543143197493e4,
        1.58132628754840899695e5,
    ],
};

const PADE_0P4375_0P46875: Pade = Pade {
    numer: &[
        5.11633396058323290276e-2,
        4.63682274468470911206e0,
        1.60248860748557199402e2,
        2.63720558501783652599e3,
        2.04317281067803852047e4,
        5.93233409946824883602e4,
        8.81331971324281446276e3,
    ],
    denom: &[
        1.00000000000000000000e0,
        5.62583376348831271328e1,
        1.09471802023964334935e3,
        7.32578868098044330527e3,
        -5.79750588904401014870e3,
        -1.22300195620521909334e5,
        1.89789689002325527907e5,
    ],
};

const PADE_0P46875_0P484375: Pade = Pade {
    numer: &[
        2.48262870167331472810e-2,
        3.15160321160735006235e0,
        1.35873615593591715436e2,
        2.57741528351772386498e3,
        1.84962907958895484391e4,
        2.77498760256500183962e4,
        4.66650326473025064328e4,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.15450908942569260141e1,
        1.31938240470054998868e3,
        7.41488495176428683684e3,
        -2.89904373344249493042e4,
    ],
};

const PADE_0P484375_0P5: Pade = Pade {
    numer: &[
        0.00000000000000000000e0,
        1.57079632679489658420e0,
        3.68677664732235740582e2,
        5.12991233169657765833e4,
        4.15925967174184357395e6,
        2.20306977390050161287e8,
        7.02631670287223054378e9,
        1.27090189596731191250e11,
        8.38808550969735622972e11,
        -4.95994728465451538598e11,
    ],
    denom: &[
        1.00000000000000000000e0,
        2.34707490998847188599e2,
        3.26086881866984488126e4,
        2.63628459501019657057e6,
        1.38653708172292751211e8,
        4.34560305046086344625e9,
        7.44152155659186741721e10,
        3.45841494519572088548e11,
        -2.83594324749756534784e12,
        4.11908049498574834947e12,
    ],
};

const PADE_EXPM3_4: Pade = Pade {
    numer: &[
        1.19511170764405535039e-1,
        1.37927972427045248330e-1,
        5.24650188881053184583e-2,
        8.03959641438786924480e-3,
        7.65196262623027097818e-4,
        4.48726026525832428753e-5,
        -2.39900494956368998141e-7,
    ],
    denom: &[
        1.00000000000000000000e0,
        9.25160082350049994731e-1,
        3.05761874775646930171e-1,
        5.22137081244781154561e-2,
        4.97356364271483616303e-3,
        2.50262885907540348010e-4,
    ],
};

const PADE_EXPM4_8: Pade = Pade {
    numer: &[
        1.39293493266195561875e-1,
        1.26741380938661691592e-1,
        4.31117040307200265931e-2,
        7.50528269269498076949e-3,
        8.63100497178570310436e-4,
        6.75686286034521991703e-5,
        3.11102625473120771882e-6,
        9.63513655399980075083e-8,
        -6.40223609013005302318e-11,
    ],
    denom: &[
        1.00000000000000000000e0,
        8.11234548272888947555e-1,
        2.63525516991753831892e-1,
        4.77118226533147280522e-2,
        5.46090741266888954909e-3,
        4.15325425646862026425e-4,
        2.02377681998442384863e-5,
        5.79823311154876056655e-7,
    ],
};

const PADE_EXPM8_16: Pade = Pade {
    numer: &[
        1.57911660613037760235e-1,
        5.59740955695099219682e-2,
        8.92895854008560399142e-3,
        8.88795299273855801726e-4,
        5.66358335596607738071e-5,
        2.46733195253941569922e-6,
        6.44829870181825872501e-8,
        7.62193242864380357931e-10,
        -7.82035413331699873450e-14,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.49007782566002620811e-1,
        5.65303702876260444572e-2,
        5.54316442661801299351e-3,
        3.58498995501703237922e-4,
        1.53872913968336341278e-5,
        4.08512152326482573624e-7,
        4.72959615756470826429e-9,
    ],
};

const PADE_EXPM16_32: Pade = Pade {
    numer: &[
        1.59150086070234563099e-1,
        6.07144002506911115092e-2,
        1.10026443723891740392e-2,
        1.24892739209332398698e-3,
        9.82922518655171276487e-5,
        5.58366837526347222893e-6,
        2.29005408647580194007e-7,
        6.44325718317518336404e-9,
        1.05110361316230054467e-10,
        1.48083450629432857655e-18,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.81470315977341203351e-1,
        6.91330250512167919573e-2,
        7.84712209182587717077e-3,
        6.17595479676821181012e-4,
        3.50829361179041199953e-5,
        1.43889153071571504712e-6,
        4.04840254888235877998e-8,
        6.60429636407045050112e-10,
    ],
};

const PADE_EXPM32_64: Pade = Pade {
    numer: &[
        1.59154943017783026201e-1,
        6.91506515614472069475e-2,
        1.44590186111155933843e-2,
        1.92616138327724025421e-3,
        1.79640147906775699469e-4,
        1.30852535070639833809e-5,
        5.55259657884038297268e-7,
        3.50107118687544980820e-8,
        -1.47102592933729597720e-22,
    ],
    denom: &[
        1.00000000000000000000e0,
        4.34486357752330500669e-1,
        9.08486933075320995164e-2,
        1.21024289017243304241e-2,
        1.12871233794777525784e-3,
        8.22170725751776749123e-5,
        3.48879932410650101194e-6,
        2.19978790407451988423e-7,
    ],
};

const PADE_EXPM64_96: Pade = Pade {
    numer: &[
        1.59154943091895335754e-1,
        1.01884113307066544176e-1,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.40156763765980698583e-1,
    ],
};

/// Body segments of `[0.125, 0.5]`. The origin is the upper bound: each
/// rational is evaluated at the distance below it.
pub(crate) const BODY: [Segment; 9] = [
    Segment::new(0.15625, 0.15625, PADE_0P125_0P15625),
    Segment::new(0.1875, 0.1875, PADE_0P15625_0P1875),
    Segment::new(0.25, 0.25, PADE_0P1875_0P25),
    Segment::new(0.3125, 0.3125, PADE_0P25_0P3125),
    Segment::new(0.375, 0.375, PADE_0P3125_0P375),
    Segment::new(0.4375, 0.4375, PADE_0P375_0P4375),
    Segment::new(0.46875, 0.46875, PADE_0P4375_0P46875),
    Segment::new(0.484375, 0.484375, PADE_0P46875_0P484375),
    Segment::new(0.5, 0.5, PADE_0P484375_0P5),
];

/// Deep lower tail, `p < 0.125`, binned by binary exponent.
pub(crate) const TAIL: [ExponentBin; 6] = [
    ExponentBin::new(-4, 3, PADE_EXPM3_4),
    ExponentBin::new(-8, 4, PADE_EXPM4_8),
    ExponentBin::new(-16, 8, PADE_EXPM8_16),
    ExponentBin::new(-32, 16, PADE_EXPM16_32),
    ExponentBin::new(-64, 32, PADE_EXPM32_64),
    ExponentBin::new(-96, 64, PADE_EXPM64_96),
];

/// Leading-order limit of `p^2 * |Q(p)|` as `p -> 0`, i.e. `1 / (2 pi)`.
pub(crate) const TAIL_LIMIT: f64 = 0.5 * core::f64::consts::FRAC_1_PI;
